//! Domain service for the gateway
//!
//! Forwards each operation to the hashing service and labels failures with
//! the remote call that produced them.

use std::sync::Arc;

use hashing_sdk::{HashingClientV1, HashingError};
use tracing::{debug, instrument, warn};

/// Operation exposed by the gateway, one per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Check,
}

impl Operation {
    /// Name of the remote procedure backing this operation.
    #[must_use]
    pub const fn rpc_name(self) -> &'static str {
        match self {
            Self::Create => "CreateHash",
            Self::Get => "GetHash",
            Self::Check => "CheckHash",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The hashing service call failed, for any reason including "not found".
    #[error("Error calling {rpc}: {source}")]
    Remote {
        rpc: &'static str,
        #[source]
        source: HashingError,
    },
}

/// Domain service holding the hashing client.
pub struct Service {
    client: Arc<dyn HashingClientV1>,
}

impl Service {
    #[must_use]
    pub fn new(client: Arc<dyn HashingClientV1>) -> Self {
        Self { client }
    }

    /// Run `op` against the hashing service and return its `hash` field.
    ///
    /// # Errors
    /// [`ServiceError::Remote`] if the call fails.
    #[instrument(name = "gateway.call", skip_all, fields(rpc = op.rpc_name(), payload_len = payload.len()))]
    pub async fn call(&self, op: Operation, payload: String) -> Result<String, ServiceError> {
        let result = match op {
            Operation::Create => self.client.create_hash(payload).await,
            Operation::Get => self.client.get_hash(payload).await,
            Operation::Check => self.client.check_hash(payload).await,
        };

        match result {
            Ok(hash) => {
                debug!("hashing call succeeded");
                Ok(hash)
            }
            Err(source) => {
                if matches!(source, HashingError::NotFound(_)) {
                    debug!(error = %source, "hashing record not found");
                } else {
                    warn!(error = %source, "hashing call failed");
                }
                Err(ServiceError::Remote {
                    rpc: op.rpc_name(),
                    source,
                })
            }
        }
    }
}
