// src/crawl/mod.rs
// =============================================================================
// This module implements the email-harvesting crawl loop.
//
// Submodules:
// - emails: Scans page content for email-address patterns
// - harvest: The attempt-budgeted loop that feeds pages through the pipeline
//
// The crawler is the pipeline's only in-repo consumer: per page it chains
// loader -> extractor -> absolutize -> filters (in the contractual order)
// and scans the loaded content for emails independently of that chain.
// =============================================================================

mod emails;
mod harvest;

// Re-export the public crawl API
pub use emails::find_emails;
pub use harvest::Crawler;
