// src/pipeline/absolutize.rs
// =============================================================================
// This module resolves relative links to absolute form against an origin.
//
// Rules:
// - Links that classify as HTTP(S) URLs pass through unchanged
// - Everything else counts as relative (see classify.rs) and is resolved
//   against the origin with standard relative-reference resolution, via
//   url::Url::join - the same logic a browser uses
// - Output length always equals input length; order is preserved; nothing
//   is deduplicated here
//
// An empty origin is a caller bug, not a runtime condition: relative links
// simply cannot be resolved without one, so we panic immediately instead of
// guessing.
//
// Rust concepts:
// - assert!: Turning preconditions into immediate, loud failures
// - Url::join: RFC 3986 relative-reference resolution
// =============================================================================

use url::Url;

use super::classify::looks_like_relative;

// Resolves each relative link against the origin; copies the rest unchanged
//
// Parameters:
//   links: raw link strings, typically fresh out of extract_all_links
//   origin: the base address (e.g. "https://example.com") - must be non-empty
//
// Returns: a Vec the same length as `links`, same order, no dedup
//
// Panics if `origin` is empty - that is a programming error in the caller.
//
// Example:
//   absolutize(&["/a", "http://x.com/b"], "http://example.com")
//     = ["http://example.com/a", "http://x.com/b"]
//
// Edge case to know about: a fragment-only link like "#section" classifies
// as relative, so it gets resolved into "<origin>/#section" here. If the
// intent is to discard same-page anchors, drop_anchor_links must run BEFORE
// this function - the tests document both orderings.
pub fn absolutize(links: &[String], origin: &str) -> Vec<String> {
    assert!(
        !origin.is_empty(),
        "absolutize() requires a non-empty origin"
    );

    let base = Url::parse(origin).ok();

    links
        .iter()
        .map(|link| {
            if !looks_like_relative(link) {
                // Already an absolute HTTP(S) URL - copy through untouched
                return link.clone();
            }
            if let Some(base) = &base {
                if let Ok(resolved) = base.join(link) {
                    return resolved.to_string();
                }
            }
            // Unresolvable (unparseable origin or join failure): copy the
            // link unchanged so output length still equals input length
            link.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(links: &[&str]) -> Vec<String> {
        links.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_relative_resolved_absolute_untouched() {
        let links = owned(&["/a", "http://x.com/b"]);
        let result = absolutize(&links, "http://example.com");
        assert_eq!(result, vec!["http://example.com/a", "http://x.com/b"]);
    }

    #[test]
    fn test_path_merging_follows_relative_reference_rules() {
        let links = owned(&["../about", "team.html"]);
        let result = absolutize(&links, "https://example.com/pages/contact/");
        assert_eq!(
            result,
            vec![
                "https://example.com/pages/about",
                "https://example.com/pages/contact/team.html"
            ]
        );
    }

    #[test]
    fn test_query_and_fragment_on_the_link_survive() {
        let links = owned(&["/a?x=1#frag"]);
        let result = absolutize(&links, "http://example.com");
        assert_eq!(result, vec!["http://example.com/a?x=1#frag"]);
    }

    #[test]
    fn test_fragment_only_links_are_absolutized_not_dropped() {
        // "#c" counts as relative, so without prior anchor removal it is
        // rewritten against the origin (the url crate renders the root
        // path explicitly) instead of disappearing.
        let links = owned(&["#c"]);
        let result = absolutize(&links, "http://example.com");
        assert_eq!(result, vec!["http://example.com/#c"]);
    }

    #[test]
    fn test_length_and_order_preserved_with_duplicates() {
        let links = owned(&["/a", "/a", "/b", "/a"]);
        let result = absolutize(&links, "http://example.com");
        assert_eq!(result.len(), links.len());
        assert_eq!(
            result,
            vec![
                "http://example.com/a",
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/a"
            ]
        );
    }

    #[test]
    fn test_unresolvable_links_copy_through() {
        // An origin that is not parseable as a URL leaves relatives as-is
        let links = owned(&["/a"]);
        let result = absolutize(&links, "not a base");
        assert_eq!(result, vec!["/a"]);
    }

    #[test]
    #[should_panic(expected = "non-empty origin")]
    fn test_empty_origin_panics() {
        absolutize(&owned(&["/a"]), "");
    }
}
