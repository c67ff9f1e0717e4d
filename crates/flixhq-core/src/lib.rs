//! FlixHQ Scraper Core Library
//!
//! Provides an async API for searching flixhq.to, reading title metadata
//! and resolving playback sources.
//!
//! # Overview
//!
//! - HTTP client with fixed browser-like headers and a request timeout
//! - HTML parsers for the search page, detail pages and server lists
//! - High-level API chaining page fetch, servers AJAX and sources AJAX
//!
//! # Example
//!
//! ```no_run
//! use flixhq_core::{FlixhqScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = FlixhqScraper::new()?;
//!
//!     let results = scraper.search("inception").await?;
//!     if let Some(first) = results.first() {
//!         let info = scraper.get_info(&first.id).await?;
//!         let sources = scraper.get_sources(&info.data_id, info.is_tv).await?;
//!         println!("Player: {:?}", sources.link());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sources
//!
//! [`FlixhqScraper::get_sources`] returns whatever the site's sources
//! endpoint answered, untouched. The player link it usually contains is
//! an embed URL, not a media file, and the embed host checks the Referer.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, FlixhqClient};

// Re-export error types
pub use error::{ErrorKind, FlixhqError, Result};

// Re-export parser functions
pub use parser::{MediaPage, parse_media_page, parse_search_results, parse_server_link};

// Re-export main scraper API
pub use scraper::FlixhqScraper;

// Re-export data types
pub use types::{Episode, MediaInfo, MediaType, SearchResult, SourcesResult};
