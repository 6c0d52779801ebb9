// src/crawl/harvest.rs
// =============================================================================
// This module implements the attempt-budgeted crawl loop.
//
// How it works:
// 1. Start with the seed address in a queue
// 2. Load the page content (HTTP fetch or file read)
// 3. Scan the content for email addresses
// 4. Run the link pipeline to get same-origin candidate links
// 5. Queue the candidates and repeat until the attempt budget runs out
//
// The loop is strictly sequential: one page at a time, one request in
// flight, no retry, no timeout. An attempt is a page we tried to load,
// whether or not the load succeeded.
//
// Rust concepts:
// - VecDeque: Double-ended queue for breadth-first traversal
// - HashSet: To deduplicate visited addresses and found emails
// =============================================================================

use reqwest::Client;
use std::collections::{HashSet, VecDeque};

use crate::pipeline::{
    absolutize, classify_as_url, drop_anchor_links, drop_asset_links, extract_links_by_text,
    load_address_content_lenient, remove_external_links,
};

use super::emails::find_emails;

// Email-harvesting crawler with a page-visit budget.
//
// Verbosity is an explicit constructor parameter, read wherever diagnostics
// are printed - there is no ambient flag anywhere.
pub struct Crawler {
    client: Client,
    verbose: bool,
    link_text: Option<String>,
    attempts_made: usize,
    links_collected: usize,
}

impl Crawler {
    // Creates a crawler
    //
    // The client carries no timeout on purpose: the loader contract is a
    // single plain GET, and any deadline policy belongs to whoever embeds
    // this crate.
    pub fn new(verbose: bool) -> Self {
        Self {
            client: Client::new(),
            verbose,
            link_text: None,
            attempts_made: 0,
            links_collected: 0,
        }
    }

    /// Restricts followed links to anchors with this exact visible text.
    /// With None (the default) every anchor is followed.
    pub fn with_link_text(mut self, link_text: Option<String>) -> Self {
        self.link_text = link_text;
        self
    }

    // Crawls from `seed` until the attempt budget is spent
    //
    // Parameters:
    //   seed: starting address - an HTTP(S) URL or a local file path
    //   budget: maximum number of pages to visit (1 = just the seed)
    //
    // Returns: discovered emails in first-seen order, deduplicated
    //
    // Pages that fail to load still consume an attempt; the failure cause
    // is swallowed (legacy loader contract) and at most logged when verbose.
    pub async fn search_until_attempts(&mut self, seed: &str, budget: usize) -> Vec<String> {
        self.attempts_made = 0;
        self.links_collected = 0;

        // Relative links on every visited page resolve against the seed's
        // classified URL; for file seeds the raw seed string serves as the
        // origin (and as the domain prefix for the external-link filter).
        let origin = match classify_as_url(seed) {
            Some(url) => url.to_string(),
            None => seed.to_string(),
        };

        let mut queue = VecDeque::new();
        queue.push_back(seed.to_string());

        let mut visited = HashSet::new();
        let mut seen = HashSet::new();
        let mut emails = Vec::new();

        while let Some(address) = queue.pop_front() {
            if self.attempts_made >= budget {
                break;
            }
            // Visit each address at most once
            if !visited.insert(address.clone()) {
                continue;
            }

            self.attempts_made += 1;
            if self.verbose {
                println!("  Visiting [attempt {}]: {}", self.attempts_made, address);
            }

            let Some(content) = load_address_content_lenient(&self.client, &address).await else {
                if self.verbose {
                    eprintln!("  Warning: could not load {}", address);
                }
                continue;
            };

            // Email scan runs over the raw content, independent of the
            // link pipeline
            for email in find_emails(&content) {
                if seen.insert(email.clone()) {
                    emails.push(email);
                }
            }

            // The contractual pipeline order: extract -> absolutize ->
            // external-filter -> anchor-filter -> asset-filter
            let raw = extract_links_by_text(&content, self.link_text.as_deref());
            let absolute = absolutize(&raw, &origin);
            let candidates =
                drop_asset_links(&drop_anchor_links(&remove_external_links(&absolute, &origin)));

            for link in candidates {
                if !visited.contains(&link) {
                    self.links_collected += 1;
                    queue.push_back(link);
                }
            }
        }

        emails
    }

    /// Number of pages visited (attempts spent) by the last search.
    pub fn attempts_made(&self) -> usize {
        self.attempts_made
    }

    /// Number of candidate links queued for visiting by the last search.
    pub fn links_collected(&self) -> usize {
        self.links_collected
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why deduplicate here and not in the pipeline?
//    - The pipeline stages guarantee they never drop or reorder duplicates
//    - Whether duplicates matter is a consumer decision; for a crawler
//      they do (visiting the same page twice wastes budget)
//
// 2. Why count failed loads as attempts?
//    - The budget bounds work performed, not work that succeeded
//    - A dead server would otherwise let the loop run forever
//
// 3. Why lenient loading?
//    - Mid-crawl, one broken link should not abort the whole search
//    - The seed's failure is indistinguishable from an email-less page,
//      which is the documented legacy trade-off of the lenient contract
// -----------------------------------------------------------------------------
