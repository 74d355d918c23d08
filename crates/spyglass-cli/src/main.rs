//! Spyglass CLI - Find and classify Mermaid.js diagram blocks in docs

mod cli;
mod report;
mod scanner;

use clap::Parser;

fn main() {
    // Parse CLI args first to get logging configuration; run() initializes
    // the subscriber from the flags
    let cli_args = cli::Cli::parse();

    let app = cli::SpyglassApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
