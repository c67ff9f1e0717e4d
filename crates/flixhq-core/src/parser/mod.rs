//! HTML parsers for flixhq.to
//!
//! Contains one module per page type plus the small selector helpers
//! they share. A missing required element or attribute is always an
//! error; parsers never return partial results.

pub mod media;
pub mod search;
pub mod servers;

pub use media::{MediaPage, parse_media_page};
pub use search::parse_search_results;
pub use servers::parse_server_link;

use scraper::{ElementRef, Selector};

use crate::error::{FlixhqError, Result};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| FlixhqError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// First descendant of `scope` matching `css`, if any
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).next())
}

/// First descendant of `scope` matching `css`, or `ElementNotFound`
pub(crate) fn require<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    select_first(scope, css)?.ok_or_else(|| FlixhqError::ElementNotFound(css.to_string()))
}

/// Value of a required attribute; `css` only labels the error
pub(crate) fn attr<'a>(element: ElementRef<'a>, css: &str, name: &str) -> Result<&'a str> {
    element
        .value()
        .attr(name)
        .ok_or_else(|| FlixhqError::missing_attribute(css, name))
}

/// Trimmed text content
pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
