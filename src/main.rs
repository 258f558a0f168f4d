//! Opiguard: opioid-addiction risk prediction service.
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use opiguard::config::ServiceConfig;
use opiguard::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting opiguard...");

    let config = ServiceConfig::from_env();

    // A missing or corrupt artifact must stop the process here, before it
    // can serve a single request.
    let state = AppState::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, http::router(Arc::new(state))).await?;

    tracing::info!("opiguard shutdown complete.");
    Ok(())
}
