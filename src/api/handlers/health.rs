/*
 * Responsibility
 * - GET /health (疎通用)
 * - uptime は AppState の started_at から、memory は best-effort snapshot
 */
use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    services::metrics::{self, MemoryStats},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: f64,
    pub memory: MemoryStats,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: state.started_at.elapsed().as_secs_f64(),
        memory: metrics::memory_snapshot(),
    })
}
