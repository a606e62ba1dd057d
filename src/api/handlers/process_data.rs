/*
 * Responsibility
 * - POST /process-data handler
 * - Json を extractor で受け、presence check → services::processing 呼び出し
 */
use axum::Json;

use crate::{
    api::dto::process_data::{ProcessDataRequest, ProcessDataResponse},
    error::AppError,
    services::processing,
};

pub async fn process_data(
    Json(req): Json<ProcessDataRequest>,
) -> Result<Json<ProcessDataResponse>, AppError> {
    let outcome = processing::process(req.data)?;
    Ok(Json(outcome.into()))
}
