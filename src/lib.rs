//! numex - extract numbers embedded in text
//!
//! Given human-produced, whitespace-delimited text such as
//! `"temp=72.5 hum=45"`, numex splits it into tokens, strips every character
//! that is not an ASCII digit or `.`, and parses what remains of each
//! non-empty token as an `f64`.
//!
//! ```rust
//! use numex_cli::extract::extract_numbers;
//!
//! let values = extract_numbers("abc123def.45xyz temp=72.5")?;
//! assert_eq!(values, vec![123.45, 72.5]);
//! # Ok::<(), numex_cli::core::NumexError>(())
//! ```
//!
//! A token that cleans to something like `"1.2.3"` or `".."` is not a valid
//! number and aborts extraction with
//! [`NumexError::MalformedNumber`](crate::core::NumexError::MalformedNumber). Callers
//! that prefer to drop such tokens can opt into
//! [`MalformedPolicy::Skip`](crate::extract::MalformedPolicy::Skip) through
//! [`extract::extract_with`](crate::extract::extract_with).
//!
//! This is not a general number parser: signs, exponents, thousands
//! separators and locale-specific decimal marks are all stripped or ignored.
//!
//! # Modules
//!
//! - [`extract`] - Tokenizing, cleaning and parsing
//! - [`core`] - Error types and user-friendly error reporting
//! - [`config`] - The `~/.numex/config.toml` settings file
//! - [`cli`] - The `numex` command-line interface
//! - [`constants`] - Shared file and environment variable names

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod extract;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
