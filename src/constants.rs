//! Constants shared across the numex codebase.
//!
//! File names and environment variable names live here so the config layer,
//! the CLI and the integration tests agree on them.

/// Directory under the user's home that holds numex state.
pub const CONFIG_DIR_NAME: &str = ".numex";

/// File name of the user configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "NUMEX_CONFIG";

/// Source name reported for input read from standard input.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// Log filter used when `--verbose` is passed.
pub const VERBOSE_LOG_FILTER: &str = "numex_cli=debug";

/// Log filter used when neither `--verbose` nor `--quiet` is passed and
/// `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
