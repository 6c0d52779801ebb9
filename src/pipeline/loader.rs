// src/pipeline/loader.rs
// =============================================================================
// This module retrieves the raw content behind an address.
//
// Two retrieval paths:
// - HTTP(S) URL: a single GET with no retry and no timeout. The body is
//   returned regardless of the status code - a 404 page's body is content
//   too, and contact pages behind misconfigured servers are common enough
//   that a status gate would lose real data.
// - Anything else: treated as a local file path, joined with the current
//   working directory, validated syntactically, then read as a string.
//
// Error handling (redesigned):
// The legacy behavior swallowed every failure into "no value", so callers
// could not tell an empty page from a dead network. We surface an explicit
// LoadError instead, and keep load_address_content_lenient() around to
// reproduce the old silent-absence contract where compatibility matters.
//
// Rust concepts:
// - Custom error enums with Display + std::error::Error
// - async functions: For network and file I/O
// =============================================================================

use reqwest::Client;
use std::fmt;

use super::classify::{classify_as_file, classify_as_url};

// Why loading an address produced no content.
//
// Each variant keeps the offending address so error messages stay useful
// without the caller re-threading it.
#[derive(Debug)]
pub enum LoadError {
    /// The address is neither an HTTP(S) URL nor a valid file path
    InvalidAddress(String),
    /// The HTTP fetch itself failed (connect, DNS, TLS, body read)
    Network {
        address: String,
        source: reqwest::Error,
    },
    /// The file read failed (missing file, permissions, encoding)
    File {
        address: String,
        source: std::io::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(address) => {
                write!(f, "'{}' is not a valid file or HTTP address", address)
            }
            Self::Network { address, source } => {
                write!(f, "fetching '{}' failed: {}", address, source)
            }
            Self::File { address, source } => {
                write!(f, "reading '{}' failed: {}", address, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddress(_) => None,
            Self::Network { source, .. } => Some(source),
            Self::File { source, .. } => Some(source),
        }
    }
}

// Loads the content behind an address, surfacing failures explicitly
//
// Parameters:
//   client: reqwest HTTP client (reused across calls for connection pooling)
//   address: URL or file path to load
//
// Returns: the full content as a String, or a LoadError saying why not
pub async fn load_address_content(client: &Client, address: &str) -> Result<String, LoadError> {
    // URL case: one GET, no retry, no status-code gate.
    // We fetch the classified form (query/fragment already stripped).
    if let Some(url) = classify_as_url(address) {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Network {
                address: address.to_string(),
                source,
            })?;

        // Deliberately no response.status() check here: the body comes
        // back whatever the server said.
        return response.text().await.map_err(|source| LoadError::Network {
            address: address.to_string(),
            source,
        });
    }

    // File case: validate the shape first, then read.
    // classify_as_file never touches the disk, so a passing check can
    // still be followed by a read error (missing file, permissions).
    if !classify_as_file(address) {
        return Err(LoadError::InvalidAddress(address.to_string()));
    }

    let path = match std::env::current_dir() {
        // join() with an already-absolute address just yields the address
        Ok(cwd) => cwd.join(address),
        Err(source) => {
            return Err(LoadError::File {
                address: address.to_string(),
                source,
            })
        }
    };

    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| LoadError::File {
            address: address.to_string(),
            source,
        })
}

// Legacy-compatible loader: every failure collapses to None
//
// This reproduces the original silent-failure contract bit-for-bit: the
// underlying cause is discarded and never reaches the caller. Prefer
// load_address_content() in new code; this exists for callers (and tests)
// that depend on absence-means-anything-went-wrong.
pub async fn load_address_content_lenient(client: &Client, address: &str) -> Option<String> {
    load_address_content(client, address).await.ok()
}
