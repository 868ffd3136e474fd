//! Unified error types for the probe service.

use std::net::SocketAddr;

use thiserror::Error;

/// Unified error type for the probe service.
///
/// Every variant is a startup or shutdown failure; request handlers never fail.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The HTTP listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound.
        addr: SocketAddr,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The server stopped with an IO error after binding.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// A global tracing subscriber was already installed.
    #[error("logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
