use crate::infra::storage::StoreError;

/// Errors returned by the digest service.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("hash not found")]
    NotFound,

    #[error("failed to {action} hash: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub(crate) fn save(source: StoreError) -> Self {
        Self::Storage {
            action: "save",
            source,
        }
    }

    pub(crate) fn get(source: StoreError) -> Self {
        Self::Storage {
            action: "get",
            source,
        }
    }
}
