//! Selector-based text extraction from fetched pages.

use scraper::{Html, Selector};

use crate::error::ExtractError;

/// Extract the watched text fragment from a page.
///
/// Parses `html` into a document, selects with `selector`, and collects
/// the text content of every matched element, trimmed of leading and
/// trailing whitespace. A selector that matches nothing yields the
/// empty string, which is a valid value like any other: going from a
/// non-empty fragment to an empty one registers as a change.
///
/// Selectors are validated at config load, so `InvalidSelector` is not
/// expected here in normal operation.
pub fn extract_text(html: &str, selector: &str) -> Result<String, ExtractError> {
    let parsed =
        Selector::parse(selector).map_err(|_| ExtractError::InvalidSelector(selector.to_string()))?;

    let document = Html::parse_document(html);
    let text: String = document
        .select(&parsed)
        .flat_map(|el| el.text())
        .collect();

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_trims() {
        let html = r#"<html><body><div id="x"> Hello </div></body></html>"#;
        assert_eq!(extract_text(html, "#x").unwrap(), "Hello");
    }

    #[test]
    fn test_collects_nested_text() {
        let html = r#"<div id="x">Release <b>1.2</b> is out</div>"#;
        assert_eq!(extract_text(html, "#x").unwrap(), "Release 1.2 is out");
    }

    #[test]
    fn test_no_match_yields_empty_string() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert_eq!(extract_text(html, "#missing").unwrap(), "");
    }

    #[test]
    fn test_multiple_matches_concatenate() {
        let html = "<ul><li class='n'>a</li><li class='n'>b</li></ul>";
        assert_eq!(extract_text(html, "li.n").unwrap(), "ab");
    }

    #[test]
    fn test_idempotent_on_same_html() {
        let html = r#"<div id="x">stable</div>"#;
        let first = extract_text(html, "#x").unwrap();
        let second = extract_text(html, "#x").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_selector_errors() {
        let err = extract_text("<div></div>", "div[[").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector(_)));
    }
}
