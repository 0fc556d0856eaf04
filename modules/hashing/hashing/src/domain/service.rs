//! Digest service
//!
//! Computes payload digests and mediates every read and write to the store.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use super::error::ServiceError;
use crate::infra::storage::DigestStore;

/// Lowercase hex SHA-256 of `payload` (always 64 characters).
#[must_use]
pub fn compute_digest(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Domain service over a [`DigestStore`].
///
/// Stateless apart from the shared store handle; clones share that handle.
#[derive(Clone)]
pub struct Service {
    store: Arc<dyn DigestStore>,
}

impl Service {
    #[must_use]
    pub fn new(store: Arc<dyn DigestStore>) -> Self {
        Self { store }
    }

    /// Digest `payload`, store `digest -> payload` and return the digest.
    ///
    /// Storing the same payload again overwrites the record with identical
    /// content.
    ///
    /// # Errors
    /// [`ServiceError::Storage`] if the store rejects the write.
    #[instrument(name = "hashing.create", skip_all, fields(payload_len = payload.len()))]
    pub async fn create_hash(&self, payload: &str) -> Result<String, ServiceError> {
        let digest = compute_digest(payload.as_bytes());
        self.store
            .set(&digest, payload)
            .await
            .map_err(ServiceError::save)?;
        debug!(%digest, "payload stored");
        Ok(digest)
    }

    /// Return the value stored under `key`.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] if nothing is stored under `key`,
    /// [`ServiceError::Storage`] if the store read fails.
    #[instrument(name = "hashing.get", skip_all, fields(key_len = key.len()))]
    pub async fn get_hash(&self, key: &str) -> Result<String, ServiceError> {
        self.lookup(key).await
    }

    /// Same lookup as [`Service::get_hash`]; the stored value is not
    /// re-digested or compared against `key`.
    ///
    /// # Errors
    /// See [`Service::get_hash`].
    #[instrument(name = "hashing.check", skip_all, fields(key_len = key.len()))]
    pub async fn check_hash(&self, key: &str) -> Result<String, ServiceError> {
        self.lookup(key).await
    }

    async fn lookup(&self, key: &str) -> Result<String, ServiceError> {
        match self.store.get(key).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                debug!("key not present");
                Err(ServiceError::NotFound)
            }
            Err(e) => Err(ServiceError::get(e)),
        }
    }
}
