/*
 * Responsibility
 * - /process-data の request/response DTO
 */
use serde::{Deserialize, Serialize};

use crate::services::processing::{ProcessingOutcome, Record};

#[derive(Debug, Deserialize)]
pub struct ProcessDataRequest {
    // None covers both a missing field and an explicit null.
    #[serde(default)]
    pub data: Option<Vec<Record>>,
}

#[derive(Debug, Serialize)]
pub struct ProcessDataResponse {
    pub original: Vec<Record>,
    pub processed: Vec<Record>,
    pub count: usize,
}

impl From<ProcessingOutcome> for ProcessDataResponse {
    fn from(outcome: ProcessingOutcome) -> Self {
        Self {
            original: outcome.original,
            processed: outcome.processed,
            count: outcome.count,
        }
    }
}
