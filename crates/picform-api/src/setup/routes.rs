//! Route configuration and setup

use crate::handlers;
use crate::middleware::{request_id_middleware, RequestId};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router,
};
use picform_core::Operation;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// The four operation directories are served read-only under their own
/// names, so `/resized_images/resized_cat.jpg` returns what `/resize` wrote.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index::index))
        .route(Operation::Upload.route(), post(handlers::upload::upload))
        .route(Operation::Resize.route(), post(handlers::resize::resize))
        .route(Operation::Convert.route(), post(handlers::convert::convert))
        .route(Operation::Crop.route(), post(handlers::crop::crop));

    for operation in Operation::ALL {
        let dir = state.storage.directory(operation);
        tracing::debug!(
            prefix = %operation.static_prefix(),
            dir = %dir.display(),
            "Serving output directory"
        );
        router = router.nest_service(&operation.static_prefix(), ServeDir::new(dir));
    }

    // Oversized bodies fail while reading the form, which the handlers
    // report through the usual redirect rather than a 413.
    let body_limit = state.config.max_upload_size_bytes;

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// HTTP span carrying the id set by the request-id middleware, which runs first
fn make_request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
