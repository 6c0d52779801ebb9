// src/pipeline/extract.rs
// =============================================================================
// This module extracts anchor targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Important: NO filtering happens here. Duplicates, empty href values and
// non-navigational schemes (javascript:, mailto:) all come back verbatim,
// in document order. Deciding what to keep is the filter pipeline's job.
//
// Rust concepts:
// - Iterators: For walking matched elements
// - filter_map: Map + filter in one pass
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every anchor element, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values - duplicates, empty strings and
// "javascript:..." targets included
//
// Example:
//   html = "<a href='/a'>A</a> <a href='#c'>C</a>"
//   result = ["/a", "#c"]
pub fn extract_all_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse can only fail on an invalid selector; "a[href]" is a
    // constant and known to be valid, so unwrap() is fine here
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Extracts hrefs of anchors whose exact rendered text matches
//
// Parameters:
//   html: the HTML content to parse
//   text: the visible link text to match, or None to match every anchor
//
// The comparison is exact: no trimming, no case-folding. "Contact" does not
// match "contact" or " Contact ". With None this behaves identically to
// extract_all_links().
//
// Example:
//   html = "<a href='/kontakt'>Contact</a> <a href='/impressum'>Imprint</a>"
//   extract_links_by_text(html, Some("Contact")) = ["/kontakt"]
pub fn extract_links_by_text(html: &str, text: Option<&str>) -> Vec<String> {
    let Some(wanted) = text else {
        return extract_all_links(html);
    };

    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter(|element| {
            // element.text() yields the text nodes under the anchor;
            // concatenated they form the rendered link text
            let rendered: String = element.text().collect();
            rendered == wanted
        })
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_hrefs_in_document_order() {
        let html = r##"
            <a href="/a">A</a>
            <a href="http://x.com/b">B</a>
            <a href="#c">C</a>
        "##;
        let links = extract_all_links(html);
        assert_eq!(links, vec!["/a", "http://x.com/b", "#c"]);
    }

    #[test]
    fn test_keeps_duplicates_and_empty_hrefs() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a><a href="">3</a>"#;
        let links = extract_all_links(html);
        assert_eq!(links, vec!["/a", "/a", ""]);
    }

    #[test]
    fn test_keeps_non_navigational_schemes() {
        // Extraction does not filter; mailto: and javascript: pass through
        let html = r#"
            <a href="mailto:hi@example.com">Mail</a>
            <a href="javascript:void(0)">JS</a>
        "#;
        let links = extract_all_links(html);
        assert_eq!(links, vec!["mailto:hi@example.com", "javascript:void(0)"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<a name="top">Top</a><a href="/a">A</a>"#;
        assert_eq!(extract_all_links(html), vec!["/a"]);
    }

    #[test]
    fn test_by_text_matches_exact_rendered_text() {
        let html = r#"
            <a href="/kontakt">Contact</a>
            <a href="/impressum">Imprint</a>
            <a href="/other">Contact us</a>
        "#;
        let links = extract_links_by_text(html, Some("Contact"));
        assert_eq!(links, vec!["/kontakt"]);
    }

    #[test]
    fn test_by_text_does_not_trim_or_case_fold() {
        let html = r#"<a href="/a"> Contact </a><a href="/b">contact</a>"#;
        assert!(extract_links_by_text(html, Some("Contact")).is_empty());
    }

    #[test]
    fn test_by_text_with_none_matches_everything() {
        let html = r#"<a href="/a">A</a><a href="/b">B</a>"#;
        assert_eq!(
            extract_links_by_text(html, None),
            extract_all_links(html)
        );
    }

    #[test]
    fn test_by_text_sees_through_nested_markup() {
        // <a><b>Contact</b></a> renders as "Contact"
        let html = r#"<a href="/kontakt"><b>Contact</b></a>"#;
        let links = extract_links_by_text(html, Some("Contact"));
        assert_eq!(links, vec!["/kontakt"]);
    }
}
