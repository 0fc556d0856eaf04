#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Transport plumbing shared by the hashing service and its callers.
//!
//! [`client`] builds tuned `tonic` channels, [`server`] hosts a set of
//! `tonic` routes on a TCP listener until cancelled.

pub mod client;
pub mod server;

pub use client::{GrpcClientConfig, connect_with_stack};
pub use server::{bind, serve_tcp};
