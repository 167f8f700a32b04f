//! Extract command: print the numbers embedded in some text.

use super::CliConfig;
use crate::config::{Config, OutputFormat};
use crate::constants::STDIN_SOURCE_NAME;
use crate::core::NumexError;
use crate::extract::{Extraction, MalformedPolicy, extract_with};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Extract numbers from text, a file or standard input.
///
/// Input is taken from the positional TEXT words (joined with single spaces),
/// otherwise from `--file`, otherwise from standard input. Words that look
/// like negative numbers (`-3`, `-3.5`) are accepted as text; other words
/// starting with `-` need a preceding `--`.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Text to extract numbers from
    #[arg(value_name = "TEXT", allow_negative_numbers = true)]
    pub text: Vec<String>,

    /// Read the input from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip malformed tokens such as "1.2.3" instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl ExtractCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input cannot be read, or if a
    /// malformed token is found under the fail policy.
    pub async fn execute(self, cli_config: &CliConfig) -> Result<()> {
        let config = Config::load_with_optional(cli_config.config_path.clone()).await?;
        let policy = if self.lenient {
            MalformedPolicy::Skip
        } else {
            config.on_malformed
        };
        let format = self.format.unwrap_or(config.format);

        let input = self.read_input().await?;
        debug!("Extracting from {} bytes with policy {:?}", input.len(), policy);

        let extraction = extract_with(&input, policy).context("Failed to extract numbers")?;
        let rendered = render(&extraction, format)?;
        if !rendered.is_empty() {
            println!("{rendered}");
        }
        Ok(())
    }

    async fn read_input(&self) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }

        match &self.file {
            Some(path) => read_file(path).await,
            None => {
                let mut input = String::new();
                tokio::io::stdin().read_to_string(&mut input).await.map_err(|e| {
                    NumexError::InputReadError {
                        source_name: STDIN_SOURCE_NAME.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(input)
            }
        }
    }
}

async fn read_file(path: &Path) -> Result<String> {
    let content =
        tokio::fs::read_to_string(path).await.map_err(|e| NumexError::InputReadError {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(content)
}

/// Render an extraction in the requested format, without a trailing newline.
fn render(extraction: &Extraction, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(extraction
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
    }
}
