//! gRPC client implementation of `HashingClientV1`

use anyhow::Result;
use async_trait::async_trait;
use hashgate_transport_grpc::{GrpcClientConfig, connect_with_stack};
use tonic::transport::Channel;

use crate::api::{HashingClientV1, HashingError};
use crate::proto::HashRequest;
use crate::proto::hashing_service_client::HashingServiceClient;

impl From<tonic::Status> for HashingError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_owned();
        match status.code() {
            tonic::Code::NotFound => Self::NotFound(message),
            tonic::Code::Internal => Self::Internal(message),
            code => Self::Transport(format!("{code}: {message}")),
        }
    }
}

/// gRPC client for the hashing service.
///
/// Cheap to clone; every clone shares the same multiplexed channel.
#[derive(Clone)]
pub struct HashingGrpcClient {
    inner: HashingServiceClient<Channel>,
}

impl HashingGrpcClient {
    /// Connect to the hashing service using the given transport settings.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or an eager connection fails.
    pub async fn connect(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_with_stack(uri, cfg).await?;
        Ok(Self::from_channel(channel))
    }

    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: HashingServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl HashingClientV1 for HashingGrpcClient {
    async fn create_hash(&self, payload: String) -> Result<String, HashingError> {
        let mut client = self.inner.clone();
        let response = client.create_hash(HashRequest { payload }).await?;
        Ok(response.into_inner().hash)
    }

    async fn get_hash(&self, payload: String) -> Result<String, HashingError> {
        let mut client = self.inner.clone();
        let response = client.get_hash(HashRequest { payload }).await?;
        Ok(response.into_inner().hash)
    }

    async fn check_hash(&self, payload: String) -> Result<String, HashingError> {
        let mut client = self.inner.clone();
        let response = client.check_hash(HashRequest { payload }).await?;
        Ok(response.into_inner().hash)
    }
}
