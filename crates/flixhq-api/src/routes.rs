//! Route handlers

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use flixhq_core::{ErrorKind, MediaInfo, SearchResult, SourcesResult};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::AppState;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchParams {
    #[serde(default)]
    pub is_tv: bool,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "FlixHQ scraper API is running" }))
}

/// GET /search?q=inception
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    let Query(params) = params?;
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            ApiError::Validation("query parameter 'q' must be at least 1 character".to_string())
        })?;

    info!(%query, "search");
    let results = state.scraper.search(&query).await?;
    Ok(Json(results))
}

/// GET /info/movie/watch-inception-19777
pub async fn media_info(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
) -> ApiResult<Json<MediaInfo>> {
    info!(%media_id, "info");
    let media = state.scraper.get_info(&media_id).await?;
    Ok(Json(media))
}

/// GET /watch/12345?is_tv=false
///
/// On failure the lookup is repeated once with `is_tv` inverted before
/// the error is returned.
pub async fn watch(
    State(state): State<AppState>,
    Path(episode_id): Path<String>,
    params: Result<Query<WatchParams>, QueryRejection>,
) -> ApiResult<Json<SourcesResult>> {
    let Query(params) = params?;
    info!(%episode_id, is_tv = params.is_tv, "watch");

    match state.scraper.get_sources(&episode_id, params.is_tv).await {
        Ok(sources) => Ok(Json(sources)),
        Err(e) if e.kind() != ErrorKind::InvalidInput => {
            warn!(%episode_id, error = %e, "sources lookup failed, retrying with is_tv inverted");
            let sources = state.scraper.get_sources(&episode_id, !params.is_tv).await?;
            Ok(Json(sources))
        }
        Err(e) => Err(e.into()),
    }
}
