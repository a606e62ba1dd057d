/*
 * Responsibility
 * - URL 構造を定義
 * - /, /health, /process-data を route
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{health::health, process_data::process_data, root::root};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/process-data", post(process_data))
}
