//! Core types for numex
//!
//! Holds the error taxonomy shared by the extractor, the configuration layer
//! and the CLI:
//! - [`NumexError`] - enumerated failure modes
//! - [`ErrorContext`] - user-facing wrapper with suggestions and details
//! - [`user_friendly_error`] - convert any `anyhow::Error` for display
//!
//! # Example
//!
//! ```rust,no_run
//! use numex_cli::core::user_friendly_error;
//! use numex_cli::extract::extract_numbers;
//!
//! match extract_numbers("version 1.2.3") {
//!     Ok(values) => println!("{values:?}"),
//!     Err(e) => user_friendly_error(e.into()).display(),
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, NumexError, user_friendly_error};
