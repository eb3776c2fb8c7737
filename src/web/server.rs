//! Web server for filedrop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::file::FileStorage;
use crate::{FiledropError, Result};

use super::handlers::{AppState, SharedDatabase};
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    ///
    /// Initializes the upload storage from the files configuration.
    pub fn new(config: &Config, db: SharedDatabase) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                FiledropError::Config(format!("invalid server address: {e}"))
            })?;

        let storage = FileStorage::new(&config.files.storage_path)?;
        tracing::info!("Upload storage initialized at: {}", config.files.storage_path);

        let app_state = AppState::new(db, storage, config.files.max_upload_size_bytes());

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: config.server.cors_origins.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = create_router(self.app_state, &self.cors_origins);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = create_router(self.app_state, &self.cors_origins);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
