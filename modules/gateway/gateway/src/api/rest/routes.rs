//! Route registration for the gateway

use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::domain::Service;

use super::handlers;

/// Build the gateway router.
///
/// Each route accepts POST only; other methods get 405 without touching the
/// hashing service.
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/createhash",
            post(handlers::create_hash).fallback(handlers::method_not_allowed),
        )
        .route(
            "/gethash",
            post(handlers::get_hash).fallback(handlers::method_not_allowed),
        )
        .route(
            "/checkhash",
            post(handlers::check_hash).fallback(handlers::method_not_allowed),
        )
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
