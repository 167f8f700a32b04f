//! Command-line interface for numex.
//!
//! # Commands
//!
//! - `extract` - Print the numbers embedded in text
//! - `config` - Show, locate or initialise the configuration file
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Disable logging entirely
//! - `--config` - Path to a configuration file (also `NUMEX_CONFIG`)
//!
//! Logs go to stderr so that stdout only ever carries extracted values.
//!
//! # Example
//!
//! ```bash
//! numex extract "temp=72.5 hum=45"
//! echo "3.14.15 42" | numex extract --lenient --format json
//! numex config init
//! ```

mod config;
mod extract;

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use config::ConfigCommand;
pub use extract::ExtractCommand;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedders can drive commands
/// without going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging.
    pub log_filter: Option<String>,

    /// Explicit configuration file, from `--config` or `NUMEX_CONFIG`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install a stderr `tracing` subscriber for this configuration.
    ///
    /// Does nothing when logging is disabled or a subscriber is already set.
    pub fn init_logging(&self) {
        let Some(filter) = &self.log_filter else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Root command and its global options.
#[derive(Parser)]
#[command(
    name = "numex",
    about = "Extract numbers embedded in whitespace-delimited text",
    version,
    long_about = "numex splits text on whitespace, strips everything but digits and '.' from each token, and prints the resulting numbers."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract numbers from text, a file or standard input
    Extract(ExtractCommand),

    /// Manage the configuration file
    Config(ConfigCommand),
}

impl Cli {
    /// Execute the parsed command line.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the selected command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Derive the runtime configuration from the global flags and `RUST_LOG`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_filter = if self.quiet {
            None
        } else if self.verbose {
            Some(VERBOSE_LOG_FILTER.to_string())
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()))
        };

        CliConfig {
            log_filter,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit runtime configuration.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the selected command.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Extract(cmd) => cmd.execute(&config).await,
            Commands::Config(cmd) => cmd.execute(&config).await,
        }
    }
}
