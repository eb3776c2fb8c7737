//! File management module for filedrop.
//!
//! Provides the upload storage layout (UUID-named files in a flat upload
//! directory) and the metadata repository backing the HTTP API.

mod metadata;
mod storage;

pub use metadata::{FileRecord, FileRepository, NewFileRecord};
pub use storage::FileStorage;

/// Maximum length for the user-supplied original filename (in characters).
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Default maximum upload size (50 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;
