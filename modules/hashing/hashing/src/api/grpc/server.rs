//! gRPC server implementation for the hashing service
//!
//! Handles gRPC requests and delegates to the domain `Service`.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use hashing_sdk::{HashRequest, HashResponse, HashingService};

use crate::domain::{Service, ServiceError};

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => Status::not_found(err.to_string()),
            ServiceError::Storage { .. } => {
                tracing::error!(error = %err, "store operation failed");
                Status::internal(err.to_string())
            }
        }
    }
}

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct HashingServiceImpl {
    service: Arc<Service>,
}

impl HashingServiceImpl {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl HashingService for HashingServiceImpl {
    async fn check_hash(
        &self,
        request: Request<HashRequest>,
    ) -> Result<Response<HashResponse>, Status> {
        let req = request.into_inner();
        let hash = self.service.check_hash(&req.payload).await?;
        Ok(Response::new(HashResponse { hash }))
    }

    async fn get_hash(
        &self,
        request: Request<HashRequest>,
    ) -> Result<Response<HashResponse>, Status> {
        let req = request.into_inner();
        let hash = self.service.get_hash(&req.payload).await?;
        Ok(Response::new(HashResponse { hash }))
    }

    async fn create_hash(
        &self,
        request: Request<HashRequest>,
    ) -> Result<Response<HashResponse>, Status> {
        let req = request.into_inner();
        let hash = self.service.create_hash(&req.payload).await?;
        Ok(Response::new(HashResponse { hash }))
    }
}
