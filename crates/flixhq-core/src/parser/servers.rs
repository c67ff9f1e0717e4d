//! Server list parser for the flixhq.to AJAX fragments
//!
//! The servers endpoints return an HTML fragment with one `.nav-item`
//! per hosting server.

use scraper::Html;

use super::select_first;
use crate::error::{FlixhqError, Result};

const SERVER_LINK: &str = ".nav-item a";

/// Link id of the first listed server
///
/// Prefers `data-linkid`, falls back to `data-id`.
///
/// # Returns
/// `Ok(None)` if the fragment lists no server at all
///
/// # Errors
/// `MissingAttribute` if the first server anchor carries neither id
pub fn parse_server_link(html: &str) -> Result<Option<String>> {
    let fragment = Html::parse_fragment(html);

    let Some(anchor) = select_first(fragment.root_element(), SERVER_LINK)? else {
        return Ok(None);
    };

    anchor
        .value()
        .attr("data-linkid")
        .or_else(|| anchor.value().attr("data-id"))
        .map(|id| Some(id.to_string()))
        .ok_or_else(|| FlixhqError::missing_attribute(SERVER_LINK, "data-linkid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_linkid() {
        let html = r#"
            <ul class="nav">
                <li class="nav-item"><a data-linkid="9876" data-id="1111" title="UpCloud">UpCloud</a></li>
                <li class="nav-item"><a data-linkid="5555" title="Vidcloud">Vidcloud</a></li>
            </ul>
        "#;
        assert_eq!(parse_server_link(html).unwrap(), Some("9876".to_string()));
    }

    #[test]
    fn test_falls_back_to_data_id() {
        let html = r#"<ul><li class="nav-item"><a data-id="4242">UpCloud</a></li></ul>"#;
        assert_eq!(parse_server_link(html).unwrap(), Some("4242".to_string()));
    }

    #[test]
    fn test_no_servers() {
        assert_eq!(parse_server_link("").unwrap(), None);
        assert_eq!(
            parse_server_link(r#"<div class="alert">No servers</div>"#).unwrap(),
            None
        );
    }

    #[test]
    fn test_anchor_without_ids() {
        let html = r#"<li class="nav-item"><a title="UpCloud">UpCloud</a></li>"#;
        assert!(matches!(
            parse_server_link(html),
            Err(FlixhqError::MissingAttribute { .. })
        ));
    }
}
