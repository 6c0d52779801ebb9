// src/pipeline/filter.rs
// =============================================================================
// This module narrows a link list down to a candidate set worth visiting.
//
// Four independent filters live here:
// - remove_query_params: "page?utm=x" -> "page"
// - drop_asset_links: drops stylesheets, scripts, images, documents...
// - drop_anchor_links: drops "#section" same-page references
// - remove_external_links: drops links leaving the origin's domain
//
// Each filter is pure and order-preserving: kept items never change their
// relative order, inputs are never mutated, and nothing is deduplicated.
// The composition ORDER is part of the contract though - see pipeline/mod.rs.
//
// Rust concepts:
// - Iterator adapters: filter, map, collect
// - Slices (&[String]): Borrowing the input instead of consuming it
// =============================================================================

use url::Url;

use super::classify::{classify_as_file, classify_as_url};

// File suffixes that denote non-HTML resources.
//
// The match is case-sensitive and exact: "CSS" and "csst" are not assets.
pub const ASSET_EXTENSIONS: &[&str] = &[
    "css", "js", "json", "xml", "rss", "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "pdf",
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "rar", "tar", "gz", "mp3", "mp4", "avi",
    "mov", "webm", "woff", "woff2", "ttf", "eot",
];

// Truncates each link at its query string
//
// "contact?ref=footer&x=1" becomes "contact"; links without a '?' pass
// through unchanged. Nothing is ever dropped here, only shortened.
pub fn remove_query_params(links: &[String]) -> Vec<String> {
    links
        .iter()
        .map(|link| match link.split_once('?') {
            Some((before, _)) => before.to_string(),
            None => link.clone(),
        })
        .collect()
}

// Drops links pointing at non-HTML assets
//
// The query string is stripped FIRST, then the final path suffix is
// compared against ASSET_EXTENSIONS. That order matters: "style.css?v=2"
// must be recognized as an asset, and it only is once the "?v=2" is gone.
//
// Example:
//   drop_asset_links(&["a.css?x=1", "b.png", "c.html"]) = ["c.html"]
pub fn drop_asset_links(links: &[String]) -> Vec<String> {
    remove_query_params(links)
        .into_iter()
        .filter(|link| !has_asset_suffix(link))
        .collect()
}

// Drops links that reference a position within the current page
//
// Only links whose value BEGINS with '#' count; "page#section" is a real
// link and survives. Note that the standard pipeline absolutizes before it
// anchor-filters, so bare "#section" links have usually been rewritten to
// "<origin>/#section" by the time this runs - see pipeline/mod.rs.
pub fn drop_anchor_links(links: &[String]) -> Vec<String> {
    links
        .iter()
        .filter(|link| !link.starts_with('#'))
        .cloned()
        .collect()
}

// Drops links leaving the origin's domain, by literal prefix comparison
//
// A link is kept iff:
// - its value literally starts with `domain_prefix`, OR
// - it is syntactically a file path (classify_as_file) - this keeps
//   same-host relative links like "/contact" alive even when this filter
//   runs before absolutization
//
// Panics if `domain_prefix` is empty - a programming error in the caller.
//
// Known quirk, kept on purpose: prefix comparison is not an authority
// comparison, so "http://example.com.attacker.com/x" passes a prefix of
// "http://example.com". Use remove_external_links_strict() when that
// matters; the tests pin both behaviors.
pub fn remove_external_links(links: &[String], domain_prefix: &str) -> Vec<String> {
    assert!(
        !domain_prefix.is_empty(),
        "remove_external_links() requires a non-empty domain prefix"
    );

    links
        .iter()
        .filter(|link| link.starts_with(domain_prefix) || classify_as_file(link))
        .cloned()
        .collect()
}

// Strict variant: compares parsed URL hosts instead of string prefixes
//
// A link is kept iff it parses as an HTTP(S) URL whose host equals the
// origin's host, or it is syntactically a file path (relative links again
// survive). This is the redesigned check that closes the
// "example.com.attacker.com" hole - offered alongside the legacy filter,
// never silently substituted for it.
pub fn remove_external_links_strict(links: &[String], origin: &str) -> Vec<String> {
    assert!(
        !origin.is_empty(),
        "remove_external_links_strict() requires a non-empty origin"
    );

    let origin_host = Url::parse(origin)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string));

    links
        .iter()
        .filter(|link| match classify_as_url(link) {
            Some(parsed) => match (&origin_host, parsed.host_str()) {
                (Some(origin_host), Some(link_host)) => origin_host == link_host,
                _ => false,
            },
            None => classify_as_file(link),
        })
        .cloned()
        .collect()
}

fn has_asset_suffix(link: &str) -> bool {
    // Only the final path segment's suffix counts, so "site.com/page"
    // is not an asset just because "com" isn't in the table
    let segment = link.rsplit('/').next().unwrap_or(link);
    match segment.rsplit_once('.') {
        Some((_, suffix)) => ASSET_EXTENSIONS.contains(&suffix),
        None => false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why &[String] parameters?
//    - The filters borrow their input and build a fresh Vec
//    - The caller keeps the original list (handy for logging/debugging)
//    - "non-mutating" is enforced by the type system, not by discipline
//
// 2. Why is filter order a contract?
//    - drop_asset_links strips queries before suffix-matching; running
//      remove_query_params "later instead" would let "a.css?x=1" through
//    - absolutize before drop_anchor_links keeps rewritten anchors;
//      the reverse order discards them
//    - Each function is trivial alone - the composition is the design
//
// 3. What does .cloned() do?
//    - filter() works on &String references; cloned() turns them back
//      into owned Strings for the output Vec
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(links: &[&str]) -> Vec<String> {
        links.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remove_query_params() {
        let result = remove_query_params(&owned(&["a?x=1&y=2", "b"]));
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_drop_asset_links_strips_queries_first() {
        // "a.css?x=1" is only recognizable as an asset after query removal
        let result = drop_asset_links(&owned(&["a.css?x=1", "b.png", "c.html"]));
        assert_eq!(result, vec!["c.html"]);
    }

    #[test]
    fn test_asset_suffix_match_is_case_sensitive_and_exact() {
        let result = drop_asset_links(&owned(&["a.CSS", "b.csst", "c.css"]));
        assert_eq!(result, vec!["a.CSS", "b.csst"]);
    }

    #[test]
    fn test_suffix_comes_from_final_path_segment_only() {
        // The host's ".com" must not be mistaken for a suffix
        let result = drop_asset_links(&owned(&["http://example.com/page", "plain"]));
        assert_eq!(result, vec!["http://example.com/page", "plain"]);
    }

    #[test]
    fn test_drop_anchor_links() {
        let result = drop_anchor_links(&owned(&["#top", "/page", "page#section"]));
        assert_eq!(result, vec!["/page", "page#section"]);
    }

    #[test]
    fn test_remove_external_links_keeps_prefix_matches_and_paths() {
        let links = owned(&["http://example.com/a", "http://other.com/b", "/rel/c"]);
        let result = remove_external_links(&links, "http://example.com");
        assert_eq!(result, vec!["http://example.com/a", "/rel/c"]);
    }

    #[test]
    fn test_prefix_match_over_approximates_on_lookalike_hosts() {
        // Documented quirk: a literal prefix check accepts lookalike hosts
        let links = owned(&["http://example.com.attacker.com/x"]);
        let result = remove_external_links(&links, "http://example.com");
        assert_eq!(result, links);
    }

    #[test]
    fn test_strict_variant_rejects_lookalike_hosts() {
        let links = owned(&[
            "http://example.com/a",
            "http://example.com.attacker.com/x",
            "/rel/c",
        ]);
        let result = remove_external_links_strict(&links, "http://example.com");
        assert_eq!(result, vec!["http://example.com/a", "/rel/c"]);
    }

    #[test]
    fn test_filters_preserve_relative_order() {
        let links = owned(&["/a", "x.png", "/b", "#c", "/d"]);
        let kept = drop_asset_links(&drop_anchor_links(&links));
        assert_eq!(kept, vec!["/a", "/b", "/d"]);
    }

    #[test]
    #[should_panic(expected = "non-empty domain prefix")]
    fn test_empty_domain_prefix_panics() {
        remove_external_links(&owned(&["/a"]), "");
    }
}
