//! CLI command implementations
//!
//! Both commands follow the same boot sequence:
//! 1. Configuration load
//! 2. Logging setup
//! 3. Store open (schema ensured)
//!
//! `serve` then builds the shared state and runs the HTTP server.

use std::path::Path;

use serde_json::json;
use tokio::runtime::Runtime;
use tracing::info;

use crate::config::Config;
use crate::http_server::{AppState, HttpServer};
use crate::observability::init_logging;
use crate::store::SongStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Create the database file and `songs` table
///
/// Safe to run against an existing database; nothing is dropped.
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = boot_config(config_path)?;

    let rt = runtime()?;
    let store = rt.block_on(open_store(&config))?;
    rt.block_on(store.close());

    write_response(init_report(&store))
}

fn init_report(store: &SongStore) -> serde_json::Value {
    json!({
        "initialized": true,
        "database": store.path().display().to_string(),
    })
}

/// Open the store and serve HTTP until interrupted
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = boot_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let rt = runtime()?;
    rt.block_on(async {
        let store = open_store(&config).await?;
        let state = AppState::shared(store.clone());
        let server = HttpServer::new(config.server.clone(), state);

        let result = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        result
    })
}

fn boot_config(config_path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(config_path)?;
    init_logging(&config.log_filter);

    match config_path {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => info!("using default configuration"),
    }

    Ok(config)
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

async fn open_store(config: &Config) -> CliResult<SongStore> {
    let store = SongStore::open(&config.database_path, config.max_connections).await?;
    Ok(store)
}
