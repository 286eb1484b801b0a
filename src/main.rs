use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod brick;
mod config;
mod events;
mod locks;
mod state;

#[cfg(test)]
mod tests;

use brick::{BrickValidator, StatDeviceIdentity, SystemXattr};
use config::AppConfig;
use events::EventHub;
pub use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brickguard=info,tower_http=info".into()),
        )
        .init();

    info!("brickguard v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: port={}, system_root={}, allow_force={}",
        config.port, config.system_root, config.allow_force
    );

    let validator = BrickValidator::new(
        &config.system_root,
        Box::new(StatDeviceIdentity),
        Box::new(SystemXattr),
    );
    let event_hub = EventHub::new(256);
    let state = Arc::new(AppState::new(config.clone(), event_hub, validator));

    let app = api::router(state);

    let bind_addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("brickguard shut down cleanly");
    Ok(())
}

/// Wait for SIGTERM or SIGINT for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { warn!("Received Ctrl+C, shutting down..."); },
        () = terminate => { warn!("Received SIGTERM, shutting down..."); },
    }
}
