#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Gateway HTTP surface against a mock hashing client

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use gateway::{Service, router};
use hashing_sdk::{HashingClientV1, HashingError};
use http::{Method, Request, StatusCode, header};
use tower::ServiceExt as _;

const HELLO_DIGEST: &str = "315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3";

/// Knows one record (`HELLO_DIGEST -> "Hello, world!"`) and counts calls.
#[derive(Default)]
struct MockHashing {
    calls: AtomicUsize,
    last_payload: Mutex<Option<String>>,
}

impl MockHashing {
    fn record(&self, payload: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.to_owned());
    }

    fn lookup(payload: &str) -> Result<String, HashingError> {
        if payload == HELLO_DIGEST {
            Ok("Hello, world!".to_owned())
        } else {
            Err(HashingError::NotFound("hash not found".to_owned()))
        }
    }
}

#[async_trait]
impl HashingClientV1 for MockHashing {
    async fn create_hash(&self, payload: String) -> Result<String, HashingError> {
        self.record(&payload);
        if payload == "Hello, world!" {
            Ok(HELLO_DIGEST.to_owned())
        } else {
            Err(HashingError::Internal("failed to save hash: store down".to_owned()))
        }
    }

    async fn get_hash(&self, payload: String) -> Result<String, HashingError> {
        self.record(&payload);
        Self::lookup(&payload)
    }

    async fn check_hash(&self, payload: String) -> Result<String, HashingError> {
        self.record(&payload);
        Self::lookup(&payload)
    }
}

fn app() -> (Router, Arc<MockHashing>) {
    let mock = Arc::new(MockHashing::default());
    let service = Arc::new(Service::new(mock.clone()));
    (router(service), mock)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn non_post_methods_are_rejected_without_calling_the_service() {
    for uri in ["/createhash", "/gethash", "/checkhash"] {
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let (app, mock) = app();
            let (status, _, body) = send(app, method.clone(), uri, "Hello, world!").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
            assert_eq!(body, "Invalid request method");
            assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
        }
    }
}

#[tokio::test]
async fn create_returns_raw_digest() {
    let (app, mock) = app();
    let (status, content_type, body) = send(app, Method::POST, "/createhash", "Hello, world!").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, HELLO_DIGEST);
    assert!(content_type.is_none(), "success responses carry no content type");
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    assert_eq!(mock.last_payload.lock().unwrap().take().as_deref(), Some("Hello, world!"));
}

#[tokio::test]
async fn get_and_check_return_stored_value() {
    for uri in ["/gethash", "/checkhash"] {
        let (app, mock) = app();
        let (status, _, body) = send(app, Method::POST, uri, HELLO_DIGEST).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, "Hello, world!");
        assert_eq!(mock.last_payload.lock().unwrap().take().as_deref(), Some(HELLO_DIGEST));
    }
}

#[tokio::test]
async fn absent_key_is_internal_error_not_404() {
    let (app, _) = app();
    let (status, _, body) = send(app, Method::POST, "/gethash", "unknown").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error calling GetHash: not found: hash not found");

    let (app, _) = crate::app();
    let (status, _, body) = send(app, Method::POST, "/checkhash", "unknown").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error calling CheckHash: "));
}

#[tokio::test]
async fn rpc_failure_on_create_names_the_call() {
    let (app, _) = app();
    let (status, _, body) = send(app, Method::POST, "/createhash", "other").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        "Error calling CreateHash: internal error: failed to save hash: store down"
    );
}

#[tokio::test]
async fn invalid_utf8_body_is_a_read_error() {
    let (app, mock) = app();
    let (status, _, body) = send(app, Method::POST, "/createhash", vec![0xc3_u8, 0x28]).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error reading request body");
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_body_is_forwarded() {
    let (app, mock) = app();
    let (status, _, _) = send(app, Method::POST, "/gethash", Body::empty()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(mock.last_payload.lock().unwrap().take().as_deref(), Some(""));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (app, mock) = app();
    let (status, _, _) = send(app, Method::POST, "/hash", "x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}
