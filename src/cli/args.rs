//! CLI argument definitions using clap
//!
//! Commands:
//! - backoffice serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// backoffice - CRUD REST backend for customer, employee, and product records
#[derive(Parser, Debug)]
#[command(name = "backoffice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./backoffice.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
