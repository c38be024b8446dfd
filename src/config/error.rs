//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Tokenizer truncation length could not be parsed as a number.
    #[error("failed to parse max sequence length '{value}': {source}")]
    MaxSeqLenParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Tokenizer truncation length is zero or beyond what the encoder supports.
    #[error("invalid max sequence length {value}: must be between 1 and {max}")]
    InvalidMaxSeqLen { value: usize, max: usize },

    /// The `KEY=VALUE` file exists but could not be read or parsed.
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
