//! Hashing API trait and types

use async_trait::async_trait;

/// Hashing API trait
///
/// Each call is a single request/response against the hashing service.
/// `get_hash` and `check_hash` take the lookup key (normally a digest
/// returned by `create_hash`) in the `payload` argument.
///
/// # Errors
/// All methods return [`HashingError::NotFound`] for an unknown key,
/// [`HashingError::Internal`] when the service's store fails, and
/// [`HashingError::Transport`] for any other failure to complete the call.
#[async_trait]
pub trait HashingClientV1: Send + Sync {
    /// Digest `payload`, store it under its digest and return the digest.
    async fn create_hash(&self, payload: String) -> Result<String, HashingError>;

    /// Return the value stored under `payload`.
    async fn get_hash(&self, payload: String) -> Result<String, HashingError>;

    /// Return the value stored under `payload`. Same behavior as `get_hash`.
    async fn check_hash(&self, payload: String) -> Result<String, HashingError>;
}

/// Error type for hashing operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HashingError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),
}
