//! HTTP interface: the purchase endpoint, liveness probe, and metrics
//! exposition.

pub mod handlers;
pub mod metrics;
pub mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::application::engine::PurchaseEngine;
use crate::config::Config;
use crate::error::Result;

use routes::AppState;

/// Binds the listener and serves requests until SIGINT or SIGTERM.
pub async fn serve(config: &Config, engine: PurchaseEngine) -> Result<()> {
    let metrics_handle = metrics::install_recorder()?;
    let state = AppState {
        engine: Arc::new(engine),
        metrics: metrics_handle,
    };
    let app = routes::app_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Serving on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
