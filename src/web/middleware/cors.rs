//! CORS layer for the Web API.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Create the CORS layer.
///
/// With no configured origins, any origin may call the API. That is the
/// service's documented default and should be tightened with explicit
/// origins in a real deployment.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        // No valid origins configured; fall back to the permissive mode
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(parsed_origins)
    }
}
