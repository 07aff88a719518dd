//! reveal-address CLI entry point
//!
//! Reverse geocode map coordinates to human-readable addresses

use reveal_address::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
