//! `hashing-service` binary.
//!
//! Configuration is loaded from:
//! 1. built-in defaults
//! 2. `--config` YAML file
//! 3. `REDIS_HOST`, `REDIS_PORT`, `DB_NUM`
//! 4. `HASHING__*` variables (e.g. `HASHING__GRPC__LISTEN_ADDR`)
//! 5. `REDIS_PASSWD`, then `HASHING__STORE__PASSWORD`, taken verbatim
//!
//! A `.env` file (or `--env-file`) is exported first; real environment
//! variables take precedence over it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hashgate_bootstrap::{init_logging, load_dotenv, shutdown_token};
use hashing::{DigestStore, HashingConfig, InMemoryStore, RedisStore};

/// gRPC hashing service backed by Redis
#[derive(Parser)]
#[command(name = "hashing-service", version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Env file to export before reading configuration (default: `.env` if present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log verbosity (-v debug, -vv trace); ignored when `RUST_LOG` is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Keep records in process memory instead of Redis
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = load_dotenv(cli.env_file.as_deref())?;
    let config = HashingConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(&config.logging, cli.verbose);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    let store: Arc<dyn DigestStore> = if cli.in_memory {
        tracing::warn!("using in-memory store, records are lost on exit");
        Arc::new(InMemoryStore::new())
    } else {
        let store = RedisStore::connect(&config.store).await.with_context(|| {
            format!(
                "failed to connect to redis at {}:{}",
                config.store.host, config.store.port
            )
        })?;
        Arc::new(store)
    };

    let cancel = shutdown_token();
    hashing::run(&config, store, cancel).await
}
