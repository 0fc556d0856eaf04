//! `gateway` binary.
//!
//! Configuration is loaded from built-in defaults, the `--config` YAML file
//! and `GATEWAY__*` variables (e.g. `GATEWAY__HASHING__ENDPOINT`). A `.env`
//! file (or `--env-file`) is exported first.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gateway::GatewayConfig;
use hashgate_bootstrap::{init_logging, load_dotenv, shutdown_token};

/// HTTP gateway for the hashing service
#[derive(Parser)]
#[command(name = "gateway", version)]
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
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = load_dotenv(cli.env_file.as_deref())?;
    let config = GatewayConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(&config.logging, cli.verbose);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    let cancel = shutdown_token();
    gateway::run(&config, cancel).await
}
