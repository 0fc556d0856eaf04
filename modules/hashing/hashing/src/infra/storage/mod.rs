//! Digest store adapter
//!
//! A thin key/value contract over the backing store. Keys are digests (or
//! whatever the caller passes to a lookup), values are payloads.

use async_trait::async_trait;

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use redis::RedisStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("redis: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Key/value store holding `digest -> payload` records.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait DigestStore: Send + Sync {
    /// `Ok(None)` when the key is absent.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached or rejects the command.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write without expiry, overwriting any existing value.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached or rejects the command.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
