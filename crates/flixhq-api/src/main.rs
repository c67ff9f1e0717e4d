use clap::Parser;
use flixhq_api::config::DEFAULT_LOG_FILTER;
use flixhq_api::{AppState, ServerConfig, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::parse();
    let state = AppState::with_config(config.client_config())?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, base_url = %config.base_url, "flixhq-api listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
