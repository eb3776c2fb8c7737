//! Router configuration for the Web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{api_info, list_files, upload_document, AppState};
use super::middleware::create_cors_layer;

/// Extra body budget for multipart boundaries and part headers, so a
/// payload just over the upload cap still reaches the handler's own
/// size check instead of being cut off by the transport.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let body_limit = app_state.max_upload_size as usize + BODY_LIMIT_SLACK;

    Router::new()
        .route("/", get(api_info))
        .route("/upload-document", post(upload_document))
        .route("/files", get(list_files))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}
