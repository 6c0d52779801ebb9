// src/pipeline/mod.rs
// =============================================================================
// This module contains the link classification, resolution, and filtering
// pipeline - the heart of mail-scout.
//
// Submodules:
// - classify: Decides whether a string is a URL, a file path, or relative
// - loader: Retrieves raw content for an address (HTTP fetch or file read)
// - extract: Pulls anchor targets out of HTML
// - absolutize: Resolves relative links against a base address
// - filter: Order-sensitive filters that narrow links to a candidate set
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod absolutize;
mod classify;
mod extract;
mod filter;
mod loader;

// Re-export public items from submodules
// This lets users write `pipeline::classify_as_url()` instead of
// `pipeline::classify::classify_as_url()`
pub use absolutize::absolutize;
pub use classify::{classify_as_file, classify_as_url, looks_like_relative, Address};
pub use extract::{extract_all_links, extract_links_by_text};
pub use filter::{
    drop_anchor_links, drop_asset_links, remove_external_links, remove_external_links_strict,
    remove_query_params, ASSET_EXTENSIONS,
};
pub use loader::{load_address_content, load_address_content_lenient, LoadError};

// -----------------------------------------------------------------------------
// PIPELINE ORDER:
//
// The filters are independently simple, but their composition order is part
// of the contract. The crawl loop chains them per candidate page as:
//
//   load_address_content
//     -> extract_all_links (or extract_links_by_text)
//     -> absolutize
//     -> remove_external_links
//     -> drop_anchor_links
//     -> drop_asset_links
//
// Two ordering rules matter:
// - drop_asset_links strips query strings BEFORE looking at the suffix,
//   so "style.css?v=2" is still recognized as an asset.
// - absolutize runs before drop_anchor_links, so a bare "#section" link has
//   already been rewritten to "<origin>/#section" by the time anchor removal
//   runs and is therefore kept. Tests pin this down.
// -----------------------------------------------------------------------------
