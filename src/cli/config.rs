//! Config command: inspect and initialise the numex configuration file.

use super::CliConfig;
use crate::config::Config;
use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Manage the numex configuration file.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommands,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be located, read or written.
    pub async fn execute(self, cli_config: &CliConfig) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show => {
                let config = Config::load_with_optional(cli_config.config_path.clone()).await?;
                print!("{}", config.to_toml()?);
            }
            ConfigSubcommands::Path => {
                println!("{}", resolve_path(cli_config)?.display());
            }
            ConfigSubcommands::Init {
                force,
            } => {
                let path = resolve_path(cli_config)?;
                if path.exists() && !force {
                    bail!(
                        "Configuration file already exists at {} (use --force to overwrite)",
                        path.display()
                    );
                }
                Config::default().save_to(&path).await?;
                println!("{} Created configuration file at {}", "✓".green(), path.display());
            }
        }
        Ok(())
    }
}

fn resolve_path(cli_config: &CliConfig) -> Result<PathBuf> {
    match &cli_config.config_path {
        Some(path) => Ok(path.clone()),
        None => Config::default_path(),
    }
}
