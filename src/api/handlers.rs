//! HTTP API handlers.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check message.
pub const HEALTH_MESSAGE: &str = "api is working";
/// Pipeline check message.
pub const PIPELINE_CHECK_MESSAGE: &str = "our CI/CD pipeline is working";

// Both payloads report success as the string "true", not a JSON boolean.
const SUCCESS: &str = "true";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "true".
    pub success: &'static str,
    /// Human readable status.
    pub message: &'static str,
}

/// Pipeline check response.
#[derive(Debug, Serialize)]
pub struct PipelineCheckResponse {
    /// Always "true".
    pub success: &'static str,
    /// Human readable status.
    pub message: &'static str,
    /// Server wall-clock time when the request was handled.
    pub timestamp: DateTime<Utc>,
}

/// Health check handler - always returns 200.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: SUCCESS,
        message: HEALTH_MESSAGE,
    })
}

/// Pipeline check handler - always returns 200 with the current time.
///
/// Deployment pipelines hit this after a rollout to confirm the new build is
/// the one answering.
pub async fn pipeline_check() -> Json<PipelineCheckResponse> {
    Json(PipelineCheckResponse {
        success: SUCCESS,
        message: PIPELINE_CHECK_MESSAGE,
        timestamp: Utc::now(),
    })
}
