//! Domain layer for the gateway

pub mod service;

pub use service::{Operation, Service, ServiceError};
