//! Main scraper API for flixhq.to
//!
//! Combines the HTTP client with the page parsers. Every operation is a
//! strictly sequential chain of requests: each hop needs the identifier
//! extracted by the previous one.

use tracing::{debug, warn};

use crate::client::{ClientConfig, FlixhqClient};
use crate::error::{FlixhqError, Result};
use crate::parser::{parse_media_page, parse_search_results, parse_server_link};
use crate::types::{Episode, MediaInfo, SearchResult, SourcesResult};
use crate::url::{build_media_path, build_search_path, is_tv_path, servers_path, sources_path};

/// Main scraper API for flixhq.to
///
/// Holds no mutable state; a single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct FlixhqScraper {
    client: FlixhqClient,
}

impl FlixhqScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = FlixhqClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = FlixhqClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for movies and series by free-text query
    ///
    /// Results keep the site's ranking.
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty
    /// - `HttpError` / `Status` if the request fails
    /// - `ElementNotFound` / `MissingAttribute` if the page cannot be parsed
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> flixhq_core::Result<()> {
    /// use flixhq_core::FlixhqScraper;
    /// let scraper = FlixhqScraper::new()?;
    /// for result in scraper.search("inception").await? {
    ///     println!("{} ({:?}): {}", result.title, result.media_type, result.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.is_empty() {
            return Err(FlixhqError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch(&build_search_path(query)).await?;
        let results = parse_search_results(&html)?;
        debug!(query, count = results.len(), "search parsed");
        Ok(results)
    }

    /// Get title, internal id and episodes of a movie or series
    ///
    /// # Arguments
    /// * `media_id` - Site-relative path as returned by [`search`](Self::search)
    ///   (e.g., "movie/watch-inception-19777")
    ///
    /// Movies get a single synthetic episode equal to `(data_id, title)`.
    /// Series get an empty episode list; see [`get_episodes`](Self::get_episodes).
    ///
    /// # Errors
    /// - `InvalidId` if media_id is empty
    /// - `ElementNotFound` if the page has no watch button
    /// - `HttpError` / `Status` if the request fails
    pub async fn get_info(&self, media_id: &str) -> Result<MediaInfo> {
        if media_id.trim_matches('/').trim().is_empty() {
            return Err(FlixhqError::InvalidId(
                "Media ID cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch(&build_media_path(media_id)).await?;
        let page = parse_media_page(&html)?;
        debug!(media_id, data_id = %page.data_id, "detail page parsed");

        let is_tv = is_tv_path(media_id);
        let episodes = if is_tv {
            Vec::new()
        } else {
            vec![Episode {
                id: page.data_id.clone(),
                title: page.title.clone(),
            }]
        };

        Ok(MediaInfo {
            title: page.title,
            data_id: page.data_id,
            is_tv,
            episodes,
        })
    }

    /// Enumerate seasons and episodes of a series
    ///
    /// # Errors
    /// Always `Unimplemented`; season enumeration is not supported yet.
    pub async fn get_episodes(&self, data_id: &str) -> Result<Vec<Episode>> {
        debug!(data_id, "episode enumeration requested");
        Err(FlixhqError::Unimplemented("season/episode enumeration"))
    }

    /// Get the raw sources JSON for a movie or episode
    ///
    /// Resolves `episode_id` to the first listed server, then asks that
    /// server for its sources. If the servers endpoint for `is_tv` lists
    /// nothing, the other content type is tried once.
    ///
    /// # Errors
    /// - `InvalidId` if episode_id is empty
    /// - `NoServers` if neither servers endpoint lists a server
    /// - `Json` if the sources response is not JSON
    /// - `HttpError` / `Status` if any request fails
    ///
    /// # Note
    /// The returned player link usually points at a third-party embed that
    /// only plays when loaded with the site's Referer header.
    pub async fn get_sources(&self, episode_id: &str, is_tv: bool) -> Result<SourcesResult> {
        if episode_id.trim().is_empty() {
            return Err(FlixhqError::InvalidId(
                "Episode ID cannot be empty".to_string(),
            ));
        }

        let (link_id, is_tv) = match self.find_server(episode_id, is_tv).await? {
            Some(link_id) => (link_id, is_tv),
            None => {
                warn!(episode_id, is_tv, "no servers listed, retrying as other content type");
                let link_id = self
                    .find_server(episode_id, !is_tv)
                    .await?
                    .ok_or_else(|| FlixhqError::NoServers(episode_id.to_string()))?;
                (link_id, !is_tv)
            }
        };
        debug!(episode_id, %link_id, is_tv, "server resolved");

        let value = self.client.fetch_json(&sources_path(&link_id, is_tv)).await?;
        Ok(SourcesResult::new(value))
    }

    /// Decrypt the player token inside a sources response
    ///
    /// # Errors
    /// Always `Unimplemented`; the embed's AES token scheme is not handled.
    pub fn decrypt_sources(&self, sources: &SourcesResult) -> Result<SourcesResult> {
        debug!(link = ?sources.link(), "decryption requested");
        Err(FlixhqError::Unimplemented("player token decryption"))
    }

    async fn find_server(&self, episode_id: &str, is_tv: bool) -> Result<Option<String>> {
        let html = self.client.fetch(&servers_path(episode_id, is_tv)).await?;
        parse_server_link(&html)
    }
}
