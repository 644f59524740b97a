//! HTTP surface of a protoyard workspace.
//!
//! - `GET /api/projects`: the aggregated index, newest first
//! - `GET /`: gallery page rendered from the same listing
//! - `GET /projects/:id`: a single project, resolved from its directory
//! - `GET /healthz`: liveness

pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{Error, Result};
pub use routes::build_router;
pub use state::AppState;

use tokio::net::TcpListener;

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| Error::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, root = %state.projects_root.display(), "serving projects");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
