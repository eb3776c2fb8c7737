//! API handlers for the Web API.

pub mod file;

pub use file::*;

use std::sync::Arc;

use crate::file::FileStorage;
use crate::Database;

/// Shared database handle used by the web layer.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across request handlers.
pub struct AppState {
    /// Database handle.
    pub db: SharedDatabase,
    /// Upload storage.
    pub storage: FileStorage,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase, storage: FileStorage, max_upload_size: u64) -> Self {
        Self {
            db,
            storage,
            max_upload_size,
        }
    }
}
