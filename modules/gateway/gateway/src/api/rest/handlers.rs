//! REST handlers for the gateway
//!
//! Bodies are passed through as raw text in both directions.

use std::string::FromUtf8Error;
use std::sync::Arc;

use axum::Extension;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::domain::{Operation, Service};

#[derive(thiserror::Error, Debug)]
enum BodyError {
    #[error("read failed: {0}")]
    Read(#[from] axum::Error),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

async fn read_payload(body: Body) -> Result<String, BodyError> {
    let bytes = axum::body::to_bytes(body, usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

async fn forward(service: &Service, op: Operation, body: Body) -> Response {
    let payload = match read_payload(body).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, rpc = op.rpc_name(), "failed to read request body");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error reading request body").into_response();
        }
    };

    match service.call(op, payload).await {
        Ok(hash) => Response::new(Body::from(hash)),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Handler for POST /createhash
pub async fn create_hash(Extension(service): Extension<Arc<Service>>, body: Body) -> Response {
    forward(&service, Operation::Create, body).await
}

/// Handler for POST /gethash
pub async fn get_hash(Extension(service): Extension<Arc<Service>>, body: Body) -> Response {
    forward(&service, Operation::Get, body).await
}

/// Handler for POST /checkhash
pub async fn check_hash(Extension(service): Extension<Arc<Service>>, body: Body) -> Response {
    forward(&service, Operation::Check, body).await
}

/// Any method other than POST on a known route.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}
