// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Invocation shape:
//   mail-scout <address> [attempts] [--verbose] [--link-text <t>] [--json]
//
// Running with no arguments (or --help) prints usage text and searches
// nothing - arg_required_else_help takes care of that.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "mail-scout",
    version = "0.1.0",
    about = "Discover contact pages and harvest email addresses",
    long_about = "mail-scout starts from a URL or a local document, follows same-origin \
                  contact-page links within a page-visit budget, and prints every email \
                  address it finds along the way.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Address to start from: an HTTP(S) URL or a local file path
    ///
    /// This is a positional argument (required, no flag needed)
    pub address: String,

    /// Maximum number of pages to visit while searching
    ///
    /// 1 means "just the starting address"; larger budgets let the crawler
    /// follow candidate links discovered on the way
    #[arg(default_value_t = 1)]
    pub attempts: usize,

    /// Print progress while crawling, plus a final visit count
    #[arg(short, long)]
    pub verbose: bool,

    /// Only follow links whose exact visible text matches this value
    ///
    /// The match is exact: no trimming, no case-folding
    #[arg(long)]
    pub link_text: Option<String>,

    /// Output a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,
}
