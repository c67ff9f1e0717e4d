//! API error type and its HTTP mapping
//!
//! Every failure becomes `{"detail": <message>, "kind": <kind>}` with a
//! status code chosen from the error kind.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flixhq_core::{ErrorKind, FlixhqError};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Scraper(#[from] FlixhqError),

    /// Request parameters failed validation
    #[error("{0}")]
    Validation(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Scraper(e) => e.kind(),
            ApiError::Validation(_) => ErrorKind::InvalidInput,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Scraper(e) => match e {
                FlixhqError::HttpError(_) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                FlixhqError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
                _ => status_for_kind(e.kind()),
            },
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Transport | ErrorKind::Status | ErrorKind::Parse => StatusCode::BAD_GATEWAY,
        ErrorKind::Mismatch => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Unimplemented => StatusCode::NOT_IMPLEMENTED,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let body = json!({
            "detail": self.to_string(),
            "kind": self.kind(),
        });
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(FlixhqError::Status { status: 404, url: String::new() }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(FlixhqError::Status { status: 500, url: String::new() }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(FlixhqError::ElementNotFound(".detail_page-watch".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(FlixhqError::NoServers("1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(FlixhqError::InvalidQuery("empty".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::from(FlixhqError::Unimplemented("x")),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (
                ApiError::Validation("q is required".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{}", error);
        }
    }

    #[test]
    fn test_display_is_transparent() {
        let error = ApiError::from(FlixhqError::NoServers("42".into()));
        assert_eq!(error.to_string(), "No servers found for episode: 42");
        assert_eq!(error.kind(), ErrorKind::Mismatch);
    }
}
