//! Error handling for numex
//!
//! This module provides the error taxonomy for the extractor and the CLI, plus
//! user-friendly error reporting. Two layers are involved:
//! 1. **Strongly-typed errors** ([`NumexError`]) returned by library functions
//! 2. **User-friendly contexts** ([`ErrorContext`]) with suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Extraction**: [`NumexError::MalformedNumber`]
//! - **Configuration**: [`NumexError::ConfigNotFound`], [`NumexError::ConfigParseError`]
//! - **Input**: [`NumexError::InputReadError`], [`NumexError::IoError`]
//!
//! Common library errors convert automatically:
//! - [`std::io::Error`] → [`NumexError::IoError`]
//! - [`toml::de::Error`] → [`NumexError::TomlError`]
//! - [`toml::ser::Error`] → [`NumexError::TomlSerError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use numex_cli::core::{NumexError, ErrorContext};
//!
//! let context = ErrorContext::new(NumexError::ConfigNotFound {
//!     path: "/tmp/missing.toml".to_string(),
//! })
//! .with_suggestion("Run 'numex config init' to create one");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors produced by numex.
///
/// The only error the extractor itself can produce is
/// [`MalformedNumber`](NumexError::MalformedNumber); the remaining variants
/// belong to the configuration layer and to CLI input handling.
#[derive(Error, Debug)]
pub enum NumexError {
    /// A cleaned token is not a valid floating-point literal.
    ///
    /// Raised for cleaned tokens holding more than one `.` (from `"3.14.15"`) or
    /// only periods (from `"ab.cd.ef"`, which cleans to `".."`).
    #[error("Malformed numeric token '{token}' (cleaned to '{cleaned}') at position {index}")]
    MalformedNumber {
        /// Zero-based position the value would have taken in the output
        index: usize,
        /// Original whitespace-delimited token
        token: String,
        /// Token after stripping everything except digits and '.'
        cleaned: String,
        /// Underlying float parse failure
        #[source]
        source: ParseFloatError,
    },

    /// Configuration file does not exist where it was explicitly requested
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Configuration file exists but could not be parsed
    #[error("Invalid configuration file syntax in {file}: {reason}")]
    ConfigParseError {
        /// Path to the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Input text could not be read
    #[error("Failed to read input from {source_name}: {reason}")]
    InputReadError {
        /// File path or `<stdin>`
        source_name: String,
        /// Underlying failure
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for NumexError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedNumber {
                index,
                token,
                cleaned,
                source,
            } => Self::MalformedNumber {
                index: *index,
                token: token.clone(),
                cleaned: cleaned.clone(),
                source: source.clone(),
            },
            Self::ConfigNotFound {
                path,
            } => Self::ConfigNotFound {
                path: path.clone(),
            },
            Self::ConfigParseError {
                file,
                reason,
            } => Self::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::InputReadError {
                source_name,
                reason,
            } => Self::InputReadError {
                source_name: source_name.clone(),
                reason: reason.clone(),
            },
            // io, toml errors are not Clone; keep the message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::TomlSerError(e) => Self::Other {
                message: format!("TOML serialization error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// An error wrapped with a suggestion and details for display to CLI users.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: NumexError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: NumexError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions where one is known.
///
/// Errors are searched through the whole `anyhow` chain, so a
/// [`NumexError`] wrapped in `.with_context(...)` is still recognised.
///
/// # Examples
///
/// ```rust,no_run
/// use numex_cli::core::user_friendly_error;
///
/// let ctx = user_friendly_error(anyhow::anyhow!("Something went wrong"));
/// ctx.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(numex_error) = cause.downcast_ref::<NumexError>() {
            return create_error_context(numex_error.clone());
        }
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let context = ErrorContext::new(NumexError::Other {
                message: format!("{error:#}"),
            });
            match io_error.kind() {
                std::io::ErrorKind::NotFound => {
                    return context
                        .with_suggestion("Check that the file exists and the path is correct");
                }
                std::io::ErrorKind::PermissionDenied => {
                    return context.with_suggestion("Check the file permissions");
                }
                std::io::ErrorKind::InvalidData => {
                    return context.with_details("numex reads UTF-8 text only");
                }
                _ => {}
            }
        }

        // A bare toml error has no path; the anyhow context carries it, if any
        if cause.downcast_ref::<toml::de::Error>().is_some() {
            return ErrorContext::new(NumexError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check the TOML syntax of your numex configuration file");
        }
    }

    ErrorContext::new(NumexError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: NumexError) -> ErrorContext {
    match &error {
        NumexError::MalformedNumber {
            cleaned,
            ..
        } => {
            let details = if cleaned.chars().all(|c| c == '.') {
                "The token contains periods but no digits".to_string()
            } else {
                format!(
                    "'{cleaned}' holds {} decimal points; only one is allowed",
                    cleaned.matches('.').count()
                )
            };
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Pass --lenient (or set on_malformed = \"skip\") to skip malformed tokens")
        }
        NumexError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'numex config init' to create a default configuration file"),
        NumexError::ConfigParseError {
            ..
        }
        | NumexError::TomlError(_) => ErrorContext::new(error).with_suggestion(
            "Check the TOML syntax; valid keys are 'on_malformed' (\"fail\" or \"skip\") and 'format' (\"text\" or \"json\")",
        ),
        NumexError::InputReadError {
            ..
        }
        | NumexError::IoError(_) => ErrorContext::new(error)
            .with_suggestion("Check that the input file exists and contains UTF-8 text"),
        _ => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn malformed(cleaned: &str) -> NumexError {
        NumexError::MalformedNumber {
            index: 2,
            token: format!("x{cleaned}"),
            cleaned: cleaned.to_string(),
            source: cleaned.parse::<f64>().unwrap_err(),
        }
    }

    #[test]
    fn test_error_display() {
        let error = malformed("1.2.3");
        assert_eq!(
            error.to_string(),
            "Malformed numeric token 'x1.2.3' (cleaned to '1.2.3') at position 2"
        );

        let error = NumexError::ConfigNotFound {
            path: "/tmp/c.toml".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration file not found: /tmp/c.toml");
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(malformed("..")).with_suggestion("Use --lenient");

        let display = format!("{ctx}");
        assert!(display.contains("Malformed numeric token"));
        assert!(display.contains("Suggestion: Use --lenient"));
    }

    #[test]
    fn test_user_friendly_error_malformed_through_context() {
        let err: anyhow::Result<()> = Err(malformed("3.14.15").into());
        let err = err.context("Failed to extract numbers").unwrap_err();

        let ctx = user_friendly_error(err);
        assert!(matches!(ctx.error, NumexError::MalformedNumber { .. }));
        assert!(ctx.suggestion.unwrap().contains("--lenient"));
        assert!(ctx.details.unwrap().contains("2 decimal points"));
    }

    #[test]
    fn test_user_friendly_error_periods_only() {
        let ctx = user_friendly_error(malformed("..").into());
        assert_eq!(ctx.details.as_deref(), Some("The token contains periods but no digits"));
    }

    #[test]
    fn test_user_friendly_error_not_found() {
        use std::io::{Error, ErrorKind};

        let err = anyhow::Error::from(Error::new(ErrorKind::NotFound, "gone"))
            .context("Failed to read /tmp/x");
        let ctx = user_friendly_error(err);
        assert_eq!(ctx.error.to_string(), "Failed to read /tmp/x: gone");
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_from_toml_error() {
        let result: Result<toml::Value, _> = toml::from_str("invalid = toml {");
        let numex_error = NumexError::from(result.unwrap_err());
        assert!(matches!(numex_error, NumexError::TomlError(_)));

        let ctx = user_friendly_error(numex_error.into());
        assert!(ctx.suggestion.unwrap().contains("TOML syntax"));
    }

    #[test]
    fn test_wrapped_toml_error_keeps_path() {
        let result: Result<toml::Value, _> = toml::from_str("invalid = toml {");
        let err = anyhow::Error::from(result.unwrap_err()).context("Failed to parse /etc/custom.toml");

        let ctx = user_friendly_error(err);
        assert!(ctx.error.to_string().starts_with("Failed to parse /etc/custom.toml: "));
        assert!(ctx.suggestion.unwrap().contains("TOML syntax"));
    }

    #[test]
    fn test_generic_error_keeps_message() {
        let ctx = user_friendly_error(anyhow::anyhow!("Something went wrong"));
        assert_eq!(ctx.error.to_string(), "Something went wrong");
        assert!(ctx.suggestion.is_none());
    }
}
