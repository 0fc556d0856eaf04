//! Hashing service
//!
//! Computes SHA-256 digests of payloads and keeps `digest -> payload`
//! records in Redis, exposed over gRPC as `hashing.v1.HashingService`.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - digest computation and store mediation
//! - `infra/storage/` - `DigestStore` trait with Redis and in-memory adapters
//! - `api/grpc/server.rs` - gRPC server implementation
//!
//! Callers should use the `hashing-sdk` crate, which provides the gRPC client.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use hashing_sdk::HashingServiceServer;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use api::grpc::HashingServiceImpl;
pub use config::HashingConfig;
pub use domain::{Service, ServiceError, compute_digest};
pub use infra::storage::{DigestStore, InMemoryStore, RedisStore, StoreError};

/// gRPC routes serving `hashing.v1.HashingService` on top of `service`.
#[must_use]
pub fn grpc_routes(service: Arc<Service>) -> Routes {
    Routes::new(HashingServiceServer::new(HashingServiceImpl::new(service)))
}

/// Serve the hashing API on the configured address until `cancel` fires.
///
/// # Errors
/// Returns an error if the listen address cannot be bound or the server fails.
pub async fn run(
    config: &HashingConfig,
    store: Arc<dyn DigestStore>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let service = Arc::new(Service::new(store));
    let listener = hashgate_transport_grpc::bind(config.grpc.listen_addr).await?;
    tracing::info!(service = hashing_sdk::SERVICE_NAME, "hashing service starting");
    hashgate_transport_grpc::serve_tcp(listener, grpc_routes(service), cancel).await
}
