// src/api/mod.rs
//! HTTP facade over the scrape pipeline.
//!
//! `GET /` reports liveness; `GET /trains/json` runs one scrape for the given
//! stations and answers with the selected departures.

pub mod error;
pub mod router;
pub mod types;

use tracing::{info, warn};

use crate::error::Result;

pub use router::{router, ApiContext};

/// Bind and serve until Ctrl-C.
pub async fn serve(ctx: ApiContext, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Starting Train Info API...");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down Train Info API...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
