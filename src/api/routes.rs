//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{health, pipeline_check};
use crate::metrics::track_requests;

/// Create the API router.
pub fn create_router() -> Router {
    let router = Router::new()
        // Liveness probe
        .route("/health", get(health))
        // Pipeline check
        .route("/argo", get(pipeline_check));

    with_middleware(router)
}

/// Apply the middleware stack.
///
/// Layers, outermost first: request tracing, request metrics, panic recovery.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(track_requests))
            .layer(CatchPanicLayer::new()),
    )
}
