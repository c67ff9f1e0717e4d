//! Search results parser for flixhq.to
//!
//! Parses the `/search/{query}` page into [`SearchResult`]s.

use scraper::{ElementRef, Html};

use super::{attr, require, selector};
use crate::error::{FlixhqError, Result};
use crate::types::{MediaType, SearchResult};
use crate::url::href_to_id;

const LIST_CONTAINER: &str = ".film_list-wrap";
const LIST_ITEM: &str = ".flw-item";
const NAME_LINK: &str = ".film-name a";
const POSTER_IMG: &str = ".film-poster img";

/// Parses search results HTML and returns results in page order
///
/// # Arguments
/// * `html` - Raw HTML string from the search page
///
/// # Returns
/// Vector of `SearchResult`, empty if the list container has no items
///
/// # Errors
/// - `ElementNotFound` if the list container is absent (page layout changed)
/// - `ElementNotFound` / `MissingAttribute` if any single item is malformed;
///   one bad item fails the whole page
pub fn parse_search_results(html: &str) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let container = require(document.root_element(), LIST_CONTAINER)?;

    let item_selector = selector(LIST_ITEM)?;

    container
        .select(&item_selector)
        .map(parse_item)
        .collect()
}

fn parse_item(item: ElementRef<'_>) -> Result<SearchResult> {
    let link = require(item, NAME_LINK)?;
    let title = attr(link, NAME_LINK, "title")?.to_string();
    let href = attr(link, NAME_LINK, "href")?;

    let id = href_to_id(href);
    if id.is_empty() {
        return Err(FlixhqError::ParseError(format!(
            "Empty href on search item '{}'",
            title
        )));
    }

    Ok(SearchResult {
        id,
        title,
        image: poster_url(item)?,
        media_type: MediaType::from_href(href),
    })
}

/// Poster URL: lazy-loaded `data-src`, else `src`
fn poster_url(item: ElementRef<'_>) -> Result<String> {
    let img = require(item, POSTER_IMG)?;

    img.value()
        .attr("data-src")
        .or_else(|| img.value().attr("src"))
        .map(str::to_string)
        .ok_or_else(|| FlixhqError::missing_attribute(POSTER_IMG, "data-src"))
}
