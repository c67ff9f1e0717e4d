//! Server configuration
//!
//! Read once at startup from command line flags or `FLIXHQ_*` environment
//! variables, then turned into an immutable [`ClientConfig`].

use std::net::SocketAddr;

use clap::Parser;
use flixhq_core::ClientConfig;

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "flixhq_api=info,flixhq_core=info";

#[derive(Parser, Debug, Clone)]
#[command(name = "flixhq-api", version, about = "HTTP API for the flixhq.to scraper")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FLIXHQ_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Site root to scrape
    #[arg(long, env = "FLIXHQ_BASE_URL", default_value = "https://flixhq.to")]
    pub base_url: String,

    /// Per-request timeout towards the site, in seconds
    #[arg(long, env = "FLIXHQ_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Client configuration for the scraper
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout_secs: self.timeout_secs,
            ..ClientConfig::with_base_url(&self.base_url)
        }
    }
}
