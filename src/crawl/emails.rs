// src/crawl/emails.rs
// =============================================================================
// This module scans text for email addresses.
//
// We use the `regex` crate with a single conventional pattern. It is not a
// full RFC 5322 validator (nothing practical is) - it matches the addresses
// people actually publish on contact pages.
//
// The scan is independent of the link pipeline: it runs over the raw loaded
// content, so addresses in plain text, mailto: hrefs, and footers are all
// picked up the same way.
//
// Rust concepts:
// - LazyLock: Compile the regex once, on first use
// - find_iter: All non-overlapping matches, left to right
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

// Returns every email-looking substring, in order of appearance
//
// Duplicates are returned as-is; deduplication (first-seen wins) is the
// crawler's job, the same way link dedup is.
pub fn find_emails(content: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}
