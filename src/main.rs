// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build a crawler and run the email search within the attempt budget
// 3. Print every discovered email on its own line (or a JSON report)
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawler awaits each page load in turn
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - email-harvesting crawl loop
mod pipeline;      // src/pipeline/ - link classification/filter pipeline

// Import items we need from our modules
use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use crawl::Crawler;
use serde::Serialize;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Machine-readable summary of one search, for --json output
#[derive(Debug, Serialize)]
struct SearchReport {
    address: String,
    emails: Vec<String>,
    attempts_made: usize,
    links_collected: usize,
}

async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, and the
    // no-arguments case (usage text, nothing searched)
    let cli = Cli::parse();

    // A budget of 0 would search nothing at all; treat it as "just the seed"
    let budget = cli.attempts.max(1);

    let mut crawler = Crawler::new(cli.verbose).with_link_text(cli.link_text.clone());
    let emails = crawler.search_until_attempts(&cli.address, budget).await;

    if cli.json {
        let report = SearchReport {
            address: cli.address.clone(),
            emails,
            attempts_made: crawler.attempts_made(),
            links_collected: crawler.links_collected(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    // Normal run: one email per line, nothing else on stdout
    for email in &emails {
        println!("{}", email);
    }

    // Only multi-page verbose runs get the closing visit count
    if cli.attempts > 1 && cli.verbose {
        println!("Visited {} link(s) in total.", crawler.attempts_made());
    }

    Ok(0)
}
