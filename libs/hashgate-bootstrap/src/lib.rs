#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Shared process bootstrap for the hashgate binaries.
//!
//! - [`config`]: layered configuration (defaults, YAML file, environment)
//! - [`dotenv`]: optional `.env` file feeding the environment layers
//! - [`logging`]: `tracing` subscriber setup
//! - [`signals`]: Ctrl+C / SIGTERM driven cancellation
//! - [`secret`]: redacting wrapper for credentials read from config

pub mod config;
pub mod dotenv;
pub mod logging;
pub mod secret;
pub mod signals;

pub use config::{EnvSource, figment_for, load_config};
pub use dotenv::load_dotenv;
pub use logging::{LogFormat, LoggingConfig, filter_directive, init_logging};
pub use secret::SecretString;
pub use signals::{shutdown_token, wait_for_shutdown};
