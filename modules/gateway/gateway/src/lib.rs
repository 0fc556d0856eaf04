//! HTTP gateway
//!
//! Exposes `/createhash`, `/gethash` and `/checkhash` and forwards each
//! request body to the hashing service over gRPC.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - forwards operations through `HashingClientV1`
//! - `api/rest/` - axum handlers and router

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use hashing_sdk::{HashingClientV1, HashingGrpcClient};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub mod api;
pub mod config;
pub mod domain;

pub use api::rest::router;
pub use config::{GatewayConfig, HashingClientConfig};
pub use domain::{Operation, Service, ServiceError};

/// Build the hashing client described by `cfg`.
///
/// # Errors
/// Returns an error if the endpoint is invalid or, with eager connect, the
/// hashing service is unreachable.
pub async fn connect_hashing(cfg: &HashingClientConfig) -> anyhow::Result<Arc<dyn HashingClientV1>> {
    let client = HashingGrpcClient::connect(cfg.endpoint.clone(), &cfg.transport())
        .await
        .with_context(|| format!("failed to set up hashing client for {}", cfg.endpoint))?;
    Ok(Arc::new(client))
}

/// Serve `router` on `listener` until `cancel` fires, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the listener address cannot be read or the server fails.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, "HTTP gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!(%bound_addr, "HTTP gateway stopped");
    Ok(())
}

/// Connect to the hashing service and serve the gateway until `cancel` fires.
///
/// # Errors
/// Returns an error if the client cannot be built, the listen address cannot
/// be bound, or the server fails.
pub async fn run(config: &GatewayConfig, cancel: CancellationToken) -> anyhow::Result<()> {
    let client = connect_hashing(&config.hashing).await?;
    let service = Arc::new(Service::new(client));

    let listener = TcpListener::bind(config.http.listen_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.http.listen_addr))?;
    tracing::info!(endpoint = %config.hashing.endpoint, "forwarding to hashing service");

    serve(listener, router(service), cancel).await
}
