//! Core data types for the flixhq.to scraper
//!
//! All values are request-scoped and never mutated after construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content type of a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Classify a search result href: `tv` iff it contains the `/tv/` segment
    pub fn from_href(href: &str) -> Self {
        if href.contains("/tv/") {
            MediaType::Tv
        } else {
            MediaType::Movie
        }
    }
}

/// A single item from the search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Site-relative path without surrounding slashes (e.g., "movie/watch-inception-19777")
    pub id: String,

    pub title: String,

    /// Poster image URL
    pub image: String,

    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// One playable entry of a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
}

/// Metadata from a movie or series detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub title: String,

    /// Site-internal ID used for the servers AJAX call
    pub data_id: String,

    pub is_tv: bool,

    /// Single synthetic entry for movies, empty for series
    pub episodes: Vec<Episode>,
}

/// Raw JSON returned by the remote "sources" endpoint
///
/// Forwarded verbatim; key order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcesResult(Value);

impl SourcesResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Player/iframe URL, if the remote included one
    pub fn link(&self) -> Option<&str> {
        self.0.get("link").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
