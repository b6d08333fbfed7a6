//! Router construction and the listener loop.

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use logbook_core::config::ServerConfig;
use logbook_core::LogStore;

use crate::handlers::{
    handle_create, handle_delete, handle_delete_all, handle_get, handle_list_all,
    handle_list_by_date, AppState,
};

/// Build the `/log` router over `store`.
pub fn router(store: Arc<LogStore>) -> Router {
    let state = AppState { store };
    let collection = get(handle_list_all)
        .post(handle_create)
        .delete(handle_delete_all);

    // Served with and without the trailing slash.
    Router::new()
        .route("/log", collection.clone())
        .route("/log/", collection)
        .route("/log/{id}", get(handle_get).delete(handle_delete))
        .route("/log/date/{year}/{month}/{day}", get(handle_list_by_date))
        .with_state(state)
}

/// Bind `host:port` from `config` and serve until Ctrl+C or SIGTERM.
pub async fn serve(store: Arc<LogStore>, config: &ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    tracing::info!("Starting logbook HTTP server on {}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
