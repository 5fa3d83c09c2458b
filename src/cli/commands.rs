//! CLI command implementations.

use std::fs;
use std::path::Path;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ServerConfig};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config } => serve(&config),
    }
}

/// Load configuration and enter the serve loop
pub fn serve(config_path: &Path) -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let config = load_config(config_path)?;
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}

/// Read the config file, falling back to defaults when it does not exist.
pub(crate) fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
