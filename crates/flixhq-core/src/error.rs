//! Error types for the flixhq.to scraper
//!
//! Provides a single error enum with human-readable messages, a coarse
//! [`ErrorKind`] tag for callers that need to branch on the failure class,
//! and string serialization for API responses.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all flixhq.to scraper operations
#[derive(Error, Debug)]
pub enum FlixhqError {
    /// Network, DNS, TLS or timeout failure
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Remote site answered with a non-2xx status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Element was found but lacks a required attribute
    #[error("Attribute '{attribute}' missing on {element}")]
    MissingAttribute { element: String, attribute: String },

    /// Response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither the movie nor the tv servers endpoint listed a server
    #[error("No servers found for episode: {0}")]
    NoServers(String),

    /// Search query was empty
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Media or episode ID was empty
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Operation that the scraper knowingly does not support yet
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
}

/// Coarse classification of a [`FlixhqError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Status,
    Parse,
    Mismatch,
    InvalidInput,
    Unimplemented,
}

impl FlixhqError {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlixhqError::HttpError(_) => ErrorKind::Transport,
            FlixhqError::Status { .. } => ErrorKind::Status,
            FlixhqError::ParseError(_)
            | FlixhqError::ElementNotFound(_)
            | FlixhqError::MissingAttribute { .. }
            | FlixhqError::Json(_) => ErrorKind::Parse,
            FlixhqError::NoServers(_) => ErrorKind::Mismatch,
            FlixhqError::InvalidQuery(_) | FlixhqError::InvalidId(_) => ErrorKind::InvalidInput,
            FlixhqError::Unimplemented(_) => ErrorKind::Unimplemented,
        }
    }

    /// Whether the underlying transport failure was a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, FlixhqError::HttpError(e) if e.is_timeout())
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        FlixhqError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

impl Serialize for FlixhqError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for flixhq.to operations
pub type Result<T> = std::result::Result<T, FlixhqError>;
