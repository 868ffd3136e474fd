//! Pipeline probe service entry point.

use tracing::{error, info};

use pipeline_probe::config::Config;
use pipeline_probe::{logging, metrics, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first: it carries the log filter.
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    logging::init_logging(&config)?;

    info!(
        port = config.port,
        metrics_port = ?config.metrics_port,
        log_json = config.log_json,
        "Configuration loaded"
    );

    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr() {
        metrics::install_exporter(addr).map_err(|e| {
            error!("Failed to start metrics exporter: {}", e);
            e
        })?;
    }

    server::run(config).await.map_err(|e| {
        error!("Server failed: {}", e);
        e
    })?;

    Ok(())
}
