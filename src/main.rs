// SPDX-License-Identifier: GPL-3.0-only
mod api;
mod config;
mod logging;
mod store;
mod validation;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use api::HttpServer;
use config::Config;
use logging::setup_logging;
use store::{CafeStore, SqliteCafeStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    setup_logging(&config.log_level)?;

    info!("Starting cafe-api v{}", env!("CARGO_PKG_VERSION"));

    // Initialize store
    let store: Arc<dyn CafeStore> = Arc::new(SqliteCafeStore::new(&config.database_path).await?);
    info!("Cafe store opened at {}", config.database_path.display());

    let http_server = HttpServer::new(store, config.api_key.clone(), config.bind_addr);
    http_server.serve(shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal (Ctrl+C), draining requests");
        }
        Err(err) => {
            // Without a signal handler, keep serving until the process is killed
            error!(error = %err, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
