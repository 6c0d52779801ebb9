// src/pipeline/classify.rs
// =============================================================================
// This module decides what kind of thing an address string is.
//
// Three kinds exist:
// - Url: an absolute HTTP or HTTPS URL ("https://example.com/contact")
// - FilePath: something that can be turned into a valid file:// URL
// - RelativeLink: everything else ("/contact", "about.html", "#top", ...)
//
// We use the `url` crate to do the actual parsing, with an explicit scheme
// whitelist (http, https) for the "is a URL" check. Everything that is not
// an HTTP(S) URL counts as "relative" - including mailto:, ftp:, javascript:
// and bare "#anchor" strings. That is a deliberately coarse binary split,
// not a full URI-scheme taxonomy; the filters downstream clean up the rest.
//
// Every function here is total: no input can make them panic or error, and
// none of them ever touches the filesystem or the network.
//
// Rust concepts:
// - Option<T>: To represent "matched" vs "did not match" without errors
// - Enums: To tag a string with its classified kind
// =============================================================================

use std::path::{Path, PathBuf};
use url::Url;

// An address string tagged with its classified kind.
//
// Classification is total: every string lands in exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    /// An absolute HTTP(S) URL, with query and fragment stripped
    Url(Url),
    /// A string that forms a valid file:// URL once made absolute
    FilePath(PathBuf),
    /// Anything else - resolved against an origin later, if at all
    RelativeLink(String),
}

impl Address {
    /// Classifies a raw address string into one of the three kinds.
    pub fn classify(s: &str) -> Address {
        if let Some(url) = classify_as_url(s) {
            Address::Url(url)
        } else if classify_as_file(s) {
            Address::FilePath(PathBuf::from(s))
        } else {
            Address::RelativeLink(s.to_string())
        }
    }
}

// Checks whether a string is an absolute HTTP(S) URL
//
// Returns Some(url) with any query string and fragment stripped, so the
// classified value is a clean, normalized page address. Returns None for
// everything else - malformed input is "not a URL", never an error.
//
// Examples:
//   "https://example.com/contact?ref=1" -> Some(https://example.com/contact)
//   "mailto:hi@example.com"             -> None (not HTTP/HTTPS)
//   "/contact"                          -> None (not absolute)
pub fn classify_as_url(s: &str) -> Option<Url> {
    let mut parsed = Url::parse(s).ok()?;

    // Only HTTP and HTTPS count as URLs here. ftp:, mailto:, data: and
    // friends all fall through to the relative-link bucket.
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }

    parsed.set_query(None);
    parsed.set_fragment(None);
    Some(parsed)
}

// Checks whether a string could denote a local file
//
// This is a syntactic check only: the string, made absolute against the
// current working directory, must form a valid file:// URL. It never looks
// at the filesystem and does not imply the file exists.
//
// Strings carrying a URI scheme ("http://...", "mailto:...") are never file
// paths, no matter what the rest looks like.
pub fn classify_as_file(s: &str) -> bool {
    if s.is_empty() || has_scheme_prefix(s) {
        return false;
    }

    let path = Path::new(s);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            // Classification never fails; an unreadable cwd just means
            // "not a file path"
            Err(_) => return false,
        }
    };

    Url::from_file_path(absolute).is_ok()
}

// Checks whether a string looks like a relative link
//
// Defined as "not an HTTP(S) URL", which makes this an over-approximation:
// "mailto:x@y.com", "javascript:void(0)" and "#top" all count as relative.
// The tests document this on purpose - downstream filters rely on it.
pub fn looks_like_relative(s: &str) -> bool {
    classify_as_url(s).is_none()
}

// Checks for a leading URI scheme ("scheme:"), per RFC 3986 rules:
// one ASCII letter followed by letters, digits, '+', '-' or '.'
fn has_scheme_prefix(s: &str) -> bool {
    let Some(colon) = s.find(':') else {
        return false;
    };
    let head = &s[..colon];
    let mut chars = head.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<Url> instead of Result?
//    - "This string is not a URL" is a normal answer, not a failure
//    - Option makes that explicit: Some(url) or None, no error to handle
//
// 2. Why strip query and fragment?
//    - The classified value identifies a page, not a specific request
//    - "?utm_source=x" and "#section" don't change which page we'd visit
//
// 3. What is Url::from_file_path?
//    - Converts an absolute filesystem path into a file:// URL
//    - Fails (returns Err) for relative paths, which is exactly the
//      validity check we want - so we make the path absolute first
//
// 4. What is the let-else syntax?
//    - `let Some(x) = expr else { return ... }` binds on match and
//      early-returns otherwise - handy for "bail out if absent" logic
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http_and_https_urls() {
        assert!(classify_as_url("http://example.com").is_some());
        assert!(classify_as_url("https://example.com/contact").is_some());
    }

    #[test]
    fn test_classify_strips_query_and_fragment() {
        let url = classify_as_url("https://example.com/contact?ref=1#top").unwrap();
        assert_eq!(url.as_str(), "https://example.com/contact");
    }

    #[test]
    fn test_non_http_strings_are_not_urls() {
        assert!(classify_as_url("/contact").is_none());
        assert!(classify_as_url("about.html").is_none());
        assert!(classify_as_url("ftp://example.com/file").is_none());
        assert!(classify_as_url("mailto:hi@example.com").is_none());
        assert!(classify_as_url("not a url at all").is_none());
    }

    #[test]
    fn test_relative_is_a_coarse_over_approximation() {
        // Known over-approximation: every non-HTTP(S) string counts as
        // relative, including schemes a stricter taxonomy would separate.
        assert!(looks_like_relative("/contact"));
        assert!(looks_like_relative("#section"));
        assert!(looks_like_relative("mailto:hi@example.com"));
        assert!(looks_like_relative("javascript:void(0)"));
        assert!(!looks_like_relative("https://example.com"));
    }

    #[test]
    fn test_file_classification_is_syntactic() {
        // page.html need not exist - the check is purely syntactic
        assert!(classify_as_file("page.html"));
        assert!(classify_as_file("/tmp/definitely/not/there.html"));
    }

    #[test]
    fn test_urls_and_schemes_are_not_files() {
        assert!(!classify_as_file("https://example.com/page.html"));
        assert!(!classify_as_file("mailto:hi@example.com"));
        assert!(!classify_as_file(""));
    }

    #[test]
    fn test_address_tags_each_kind() {
        assert!(matches!(
            Address::classify("https://example.com"),
            Address::Url(_)
        ));
        assert!(matches!(
            Address::classify("docs/page.html"),
            Address::FilePath(_)
        ));
        assert!(matches!(
            Address::classify("mailto:hi@example.com"),
            Address::RelativeLink(_)
        ));
    }

    #[test]
    fn test_classification_never_panics_on_junk() {
        for junk in ["", ":", "::::", "http://", "a b c", "\u{0}"] {
            let _ = classify_as_url(junk);
            let _ = looks_like_relative(junk);
            let _ = classify_as_file(junk);
        }
    }
}
