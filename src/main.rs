use std::sync::Arc;

use tracing::info;

use filedrop::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = filedrop::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        filedrop::logging::init_console_only(&config.logging.level);
    }

    info!("filedrop - File Upload Service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database at {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    let server = match WebServer::new(&config, Arc::new(db)) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to start web server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        eprintln!("Web server error: {e}");
        std::process::exit(1);
    }
}
