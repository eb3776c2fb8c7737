//! Web API module for filedrop.
//!
//! Exposes the upload, listing and API-info routes over HTTP with JSON
//! responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
