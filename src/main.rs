//! client-api entry point
//!
//! Parses CLI arguments, dispatches to the CLI module, prints errors to
//! stderr, and exits non-zero on failure. All wiring lives in `cli::run`.

use client_api::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
