use shop_config::Config;
use shop_server::{AppState, build_router, logger, metrics};
use shop_store::InMemoryConversationStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting shop-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = if config.server.metrics_enabled {
        let handle = metrics::install_prometheus()?;
        info!("Prometheus metrics available at /metrics");
        Some(handle)
    } else {
        None
    };

    let store = Arc::new(InMemoryConversationStore::new());
    warn!("Using in-memory conversation store; data is lost on restart");

    let config_dir = Config::config_dir()?;
    let app_state = AppState::from_config(&config, &config_dir, store, prometheus)?;

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
