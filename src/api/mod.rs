//! HTTP API module for the liveness and pipeline check endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{health, pipeline_check, HealthResponse, PipelineCheckResponse};
pub use routes::{create_router, with_middleware};
