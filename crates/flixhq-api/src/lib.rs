//! FlixHQ HTTP API
//!
//! Exposes the scraper over a small JSON API:
//!
//! - `GET /` - liveness message
//! - `GET /search?q=<query>` - list of search results
//! - `GET /info/{media_id}` - title metadata; `media_id` may contain slashes
//! - `GET /watch/{episode_id}?is_tv=<bool>` - raw sources JSON
//!
//! # Usage
//!
//! ```no_run
//! use flixhq_api::{AppState, router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new()?;
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, router(state)).await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use axum::{Router, routing::get};
use flixhq_core::{ClientConfig, FlixhqScraper, Result};

pub mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared handler state
///
/// The scraper is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub(crate) scraper: Arc<FlixhqScraper>,
}

impl AppState {
    /// State with the default flixhq.to configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// State with an injected client configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let scraper = FlixhqScraper::with_config(config)?;
        Ok(Self {
            scraper: Arc::new(scraper),
        })
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/search", get(routes::search))
        .route("/info/{*media_id}", get(routes::media_info))
        .route("/watch/{episode_id}", get(routes::watch))
        .with_state(state)
}
