//! Middleware for the Web API.

mod cors;

pub use cors::create_cors_layer;
