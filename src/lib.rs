//! filedrop - a minimal file-upload service.
//!
//! Clients submit files over HTTP multipart; the server persists each one
//! under a generated name, records metadata in SQLite, and serves a
//! newest-first listing.

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{FiledropError, Result};
pub use file::{FileRecord, FileRepository, FileStorage, NewFileRecord};
pub use web::{create_router, ApiError, WebServer};
