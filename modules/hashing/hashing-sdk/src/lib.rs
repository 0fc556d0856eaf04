//! Hashing SDK
//!
//! Everything needed to call the hashing service:
//! - API trait (`HashingClientV1`)
//! - Error type (`HashingError`)
//! - gRPC client (`HashingGrpcClient`)
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use hashing_sdk::{HashingClientV1, HashingGrpcClient};
//! use hashgate_transport_grpc::GrpcClientConfig;
//!
//! let cfg = GrpcClientConfig::new(hashing_sdk::SERVICE_NAME);
//! let client = HashingGrpcClient::connect("http://hashing-service:50051", &cfg).await?;
//! let digest = client.create_hash("Hello, world!".to_owned()).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{HashingClientV1, HashingError};

// === GRPC CLIENT ===
mod client;
pub use client::HashingGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `HashingService`
#[allow(clippy::all, clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("hashing.v1");
}

// Re-export proto types needed by server
pub use proto::hashing_service_server::{HashingService, HashingServiceServer};
pub use proto::{HashRequest, HashResponse};

/// Fully qualified gRPC service name
pub const SERVICE_NAME: &str = "hashing.v1.HashingService";
