//! Main entry point for the trivia API server.
//!
//! This module initializes logging, loads environment variables and CLI
//! arguments, then starts the HTTP server.

use clap::Parser;
use tracing::{error, info, warn};

use trivia_api::{api, cli, utils};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Launch the HTTP server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::try_parse().expect("Failed to parse CLI arguments");
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    info!("Starting trivia API server on port {}", cli.port);
    if let Err(e) = api::server::launch_server(cli.port).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
