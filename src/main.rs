// src/main.rs
mod config;
mod dtos;
mod error;
mod geo;
mod handlers;
mod models;
mod pipeline;
mod routes;
mod state;
mod upstream;

use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use dotenvy::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigError};
use crate::error::UpstreamError;
use crate::upstream::HttpGourmetApi;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] UpstreamError),
    #[error("failed to bind to any port starting at {port} on {host}")]
    Bind { host: IpAddr, port: u16 },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables first so RUST_LOG in .env applies
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let result = match AppConfig::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Shutting down");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        base_url = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout.as_secs(),
        "Gourmet API configured"
    );

    // Create the upstream client once for the whole process
    let api = HttpGourmetApi::new(config.upstream.clone())?;

    let app_state = state::AppState::new(Arc::new(api));
    let app = routes::build_app(app_state);

    let listener = bind_with_fallback(config.host, config.port).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// Try port..port+20 to avoid crash when address is in use
async fn bind_with_fallback(host: IpAddr, base_port: u16) -> Result<TcpListener, StartupError> {
    for offset in 0u16..=20 {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::from((host, port));
        match TcpListener::bind(addr).await {
            Ok(l) => {
                tracing::info!("Server running on {}", addr);
                return Ok(l);
            }
            Err(e) => {
                if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
            }
        }
    }
    Err(StartupError::Bind { host, port: base_port })
}
