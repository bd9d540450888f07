//! Lingo API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p lingo-api
//! ```
//!
//! Configuration is loaded from environment variables (`.env` supported).

use lingo_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first; it decides the tracing format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.env,
        port = config.server.port,
        "Starting Lingo API server"
    );

    if let Err(e) = lingo_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
