//! Liveness and CI/CD pipeline check HTTP service.
//!
//! Two read-only endpoints, both answering with small JSON payloads:
//!
//! ```text
//! GET /health  -> {"success":"true","message":"api is working"}
//! GET /argo    -> {"success":"true","message":"our CI/CD pipeline is working","timestamp":"..."}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Handlers and router
//! - [`server`]: Listener startup and graceful shutdown
//! - [`logging`]: Tracing subscriber setup
//! - [`metrics`]: Request metrics and Prometheus exporter

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod server;

pub use config::Config;
pub use error::{Result, ServiceError};
