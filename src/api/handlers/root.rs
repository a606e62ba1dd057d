/*
 * Responsibility
 * - GET / (サービス情報)
 * - version は自分の build version を返す (依存の version は出さない)
 */
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Security Example API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
