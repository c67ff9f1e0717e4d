//! Detail page parser for flixhq.to
//!
//! Extracts the site-internal `data_id` and display title from a
//! movie or series page.

use scraper::Html;

use super::{attr, require, text};
use crate::error::Result;

const WATCH_BUTTON: &str = ".detail_page-watch";
const HEADING_LINK: &str = ".heading-name a";

/// Identifiers read from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPage {
    pub data_id: String,
    pub title: String,
}

/// Parses a detail page
///
/// # Errors
/// - `ElementNotFound` if the watch button or heading is absent
///   (unknown media id or changed markup)
/// - `MissingAttribute` if the watch button has no `data-id`
pub fn parse_media_page(html: &str) -> Result<MediaPage> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let watch = require(root, WATCH_BUTTON)?;
    let data_id = attr(watch, WATCH_BUTTON, "data-id")?.to_string();
    let title = text(require(root, HEADING_LINK)?);

    Ok(MediaPage { data_id, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlixhqError;

    #[test]
    fn test_parse_media_page() {
        let html = r#"
        <html><body>
            <div class="detail_page-infor">
                <h2 class="heading-name"><a href="/movie/watch-inception-19777">
                    Inception
                </a></h2>
                <a class="btn btn-radius btn-primary detail_page-watch" data-id="12345" data-type="1">Watch now</a>
            </div>
        </body></html>
        "#;

        let page = parse_media_page(html).unwrap();
        assert_eq!(
            page,
            MediaPage {
                data_id: "12345".to_string(),
                title: "Inception".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_watch_button() {
        let html = r#"<html><body><h2 class="heading-name"><a>Inception</a></h2></body></html>"#;
        match parse_media_page(html) {
            Err(FlixhqError::ElementNotFound(css)) => assert_eq!(css, WATCH_BUTTON),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_watch_button_without_data_id() {
        let html = r#"
            <h2 class="heading-name"><a>Inception</a></h2>
            <a class="detail_page-watch">Watch now</a>
        "#;
        assert!(matches!(
            parse_media_page(html),
            Err(FlixhqError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_missing_heading() {
        let html = r#"<a class="detail_page-watch" data-id="1"></a>"#;
        match parse_media_page(html) {
            Err(FlixhqError::ElementNotFound(css)) => assert_eq!(css, HEADING_LINK),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }
}
