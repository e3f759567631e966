use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info};

use medicore::api::rest::{PortalState, RestApi};
use medicore::chat::ChatHub;
use medicore::config::load_config;
use medicore::error::PortalError;
use medicore::{DataServices, SessionStore};

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config(Path::new("config.yaml"))?;

    info!(
        session_path = %config.session.path,
        latency_ms = config.data.latency_ms,
        "starting medicore"
    );

    let state = Arc::new(PortalState {
        sessions: SessionStore::open(&config.session.path),
        services: DataServices::in_memory(&config.data),
        chat: ChatHub::new(),
        fetch_timeout: config.data.fetch_timeout(),
    });

    let api = RestApi::new(Arc::clone(&state));

    info!("starting server on {}:{}", config.api.host, config.api.port);

    // Channel for the shutdown signal.
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let routes = api.routes();
    let addr: std::net::SocketAddr = format!("{}:{}", config.api.host, config.api.port)
        .parse()
        .unwrap_or_else(|_| ([127, 0, 0, 1], config.api.port).into());

    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async move {
        shutdown_rx.await.ok();
        info!("shutting down server");
    });

    let server_handle = tokio::spawn(server);

    // Wait for Ctrl+C.
    if let Err(e) = signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
    info!("shutdown signal received, draining");

    shutdown_tx.send(()).ok();

    if let Err(e) = server_handle.await {
        error!("server task failed: {}", e);
    }

    info!("server shutdown complete");
    Ok(())
}
