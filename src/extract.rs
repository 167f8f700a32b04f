//! Numeric token extraction.
//!
//! Pulls the numbers out of human-produced, whitespace-delimited text such as
//! `"temp=72.5 hum=45"`. Each whitespace token is reduced to its digits and
//! periods, and whatever survives is parsed as an `f64`.
//!
//! # Algorithm
//!
//! 1. Split the input on runs of whitespace ([`tokens`], [`is_separator`]).
//! 2. Keep only ASCII digits and `.` from each token, in order ([`clean_token`]).
//!    Cleaning does not check well-formedness, so `"3.14.15"` stays `"3.14.15"`.
//! 3. Drop tokens that cleaned to the empty string.
//! 4. Parse each survivor with `f64::from_str`.
//!
//! Because a cleaned token only ever holds digits and periods, the shapes that
//! parse are `D`, `D.`, `.D` and `D.D`. A lone `.`, or any token with two or more
//! periods, is malformed. What happens then is decided by [`MalformedPolicy`]:
//! [`extract_numbers`] always fails on the first one, [`extract_with`] can be
//! asked to skip them instead.
//!
//! Negative numbers are not recognised: `-` is stripped like any other
//! non-numeric character, so `"-3"` yields `3.0`.
//!
//! # Examples
//!
//! ```rust
//! use numex_cli::extract::extract_numbers;
//!
//! assert_eq!(extract_numbers("temp=72.5 hum=45").unwrap(), vec![72.5, 45.0]);
//! assert_eq!(extract_numbers("abc def").unwrap(), Vec::<f64>::new());
//! assert!(extract_numbers("version 1.2.3").is_err());
//! ```

use crate::core::NumexError;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, trace, warn};

/// What to do with a cleaned token that is not a valid float literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort extraction with [`NumexError::MalformedNumber`]; no partial result.
    #[default]
    Fail,
    /// Record the token in [`Extraction::skipped`] and keep going.
    Skip,
}

/// A token dropped under [`MalformedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    /// Zero-based position among the non-empty cleaned tokens
    pub index: usize,
    /// Original whitespace-delimited token
    pub token: String,
    /// The token after cleaning
    pub cleaned: String,
}

/// Result of [`extract_with`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    /// Parsed values in input order
    #[serde(serialize_with = "serialize_values")]
    pub values: Vec<f64>,
    /// Malformed tokens that were skipped; always empty under [`MalformedPolicy::Fail`]
    pub skipped: Vec<SkippedToken>,
}

/// Serialize values as JSON numbers, writing non-finite ones as strings.
///
/// A long run of digits overflows to infinity; JSON has no literal for it, so
/// it is written as `"inf"`, the same text the plain output prints.
fn serialize_values<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        if value.is_finite() {
            seq.serialize_element(value)?;
        } else {
            seq.serialize_element(&value.to_string())?;
        }
    }
    seq.end()
}

/// Returns `true` for characters that separate tokens.
///
/// Unicode whitespace plus the ASCII information separators U+001C to U+001F.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split `input` into whitespace-separated tokens.
///
/// Runs of separators count as one and no empty tokens are produced, so empty
/// or all-whitespace input yields nothing.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(is_separator).filter(|token| !token.is_empty())
}

/// Returns `true` for the characters that survive cleaning: `0`-`9` and `.`.
#[must_use]
pub const fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Strip every character from `token` except ASCII digits and `.`.
///
/// ```rust
/// use numex_cli::extract::clean_token;
///
/// assert_eq!(clean_token("abc123def.45xyz"), "123.45");
/// assert_eq!(clean_token("ab.cd.ef"), "..");
/// assert_eq!(clean_token("hello"), "");
/// ```
#[must_use]
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|&c| is_numeric_char(c)).collect()
}

/// Extract every number embedded in `input`, failing on the first malformed token.
///
/// Equivalent to [`extract_with`] under [`MalformedPolicy::Fail`].
///
/// # Errors
///
/// Returns [`NumexError::MalformedNumber`] for the first cleaned token that
/// `f64` parsing rejects. No values are returned in that case.
pub fn extract_numbers(input: &str) -> Result<Vec<f64>, NumexError> {
    extract_with(input, MalformedPolicy::Fail).map(|extraction| extraction.values)
}

/// Extract every number embedded in `input` under an explicit malformed-token policy.
///
/// # Errors
///
/// Under [`MalformedPolicy::Fail`], returns [`NumexError::MalformedNumber`] for
/// the first malformed cleaned token. Under [`MalformedPolicy::Skip`] this never
/// fails.
pub fn extract_with(input: &str, policy: MalformedPolicy) -> Result<Extraction, NumexError> {
    let mut extraction = Extraction::default();

    let candidates = tokens(input)
        .map(|token| (token, clean_token(token)))
        .filter(|(_, cleaned)| !cleaned.is_empty());

    for (index, (token, cleaned)) in candidates.enumerate() {
        trace!(token, cleaned = cleaned.as_str(), "Cleaned token");

        match cleaned.parse::<f64>() {
            Ok(value) => extraction.values.push(value),
            Err(source) => match policy {
                MalformedPolicy::Fail => {
                    return Err(NumexError::MalformedNumber {
                        index,
                        token: token.to_string(),
                        cleaned,
                        source,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!("Skipping malformed numeric token '{}' (cleaned to '{}')", token, cleaned);
                    extraction.skipped.push(SkippedToken {
                        index,
                        token: token.to_string(),
                        cleaned,
                    });
                }
            },
        }
    }

    debug!(
        values = extraction.values.len(),
        skipped = extraction.skipped.len(),
        "Extracted numbers"
    );

    Ok(extraction)
}
