use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};

mod api;
mod conclusion;
mod config;
mod error;
mod models;
mod sports;

use api::AppState;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal in production
    let _ = dotenvy::dotenv();

    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    info!("Upstream provider: {}", config.provider);
    if config.api_key().is_none() {
        warn!(
            "{} is not set; /api/predictions-by-sport will answer 500 until it is",
            config.api_key_var()
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server is listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
