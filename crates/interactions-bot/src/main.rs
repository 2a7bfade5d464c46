//! Interactions webhook - Entry point.

use anyhow::Context;
use interactions_bot::{
    api::{create_router, AppState},
    config::Config,
    logging::init_logging,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log);

    info!("Starting interactions webhook...");

    let state = AppState::from_config(&config).context("Failed to initialize application")?;

    info!(
        variant = ?config.catalog.variant,
        "Registered {} command handlers: {:?}",
        state.commands.len(),
        state.commands.names()
    );

    let listen_addr: IpAddr = config
        .server
        .listen_addr
        .parse()
        .context("Invalid listen address")?;
    let addr = SocketAddr::new(listen_addr, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
