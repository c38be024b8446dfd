//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `GRADER_*` environment variables, optionally
//! seeded from a `KEY=VALUE` file via [`load_env_file`].

pub mod env_file;
pub mod error;


pub use env_file::{ENV_FILE_VAR, env_file_path, load_env_file};
pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_SEQ_LEN, DEFAULT_PORT, MAX_SUPPORTED_SEQ_LEN};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GRADER_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Sentence-transformer directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    ///
    /// When unset the service grades with the fallback similarity.
    pub model_path: Option<PathBuf>,

    /// Tokenizer truncation length. Default: `256`.
    pub max_seq_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
            model_path: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "GRADER_PORT";
    const ENV_BIND_ADDR: &'static str = "GRADER_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "GRADER_MODEL_PATH";
    const ENV_MAX_SEQ_LEN: &'static str = "GRADER_MAX_SEQ_LEN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let max_seq_len = Self::parse_max_seq_len_from_env(defaults.max_seq_len)?;

        Ok(Self {
            port,
            bind_addr,
            model_path,
            max_seq_len,
        })
    }

    /// Validates basic invariants.
    ///
    /// The model path is not checked here; an unusable model directory selects the fallback
    /// similarity provider at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seq_len == 0 || self.max_seq_len > MAX_SUPPORTED_SEQ_LEN {
            return Err(ConfigError::InvalidMaxSeqLen {
                value: self.max_seq_len,
                max: MAX_SUPPORTED_SEQ_LEN,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// Reads only the port, for the `--health-check` flag.
    pub fn port_from_env() -> u16 {
        env::var(Self::ENV_PORT)
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .filter(|p| *p != 0)
            .unwrap_or(DEFAULT_PORT)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_max_seq_len_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_SEQ_LEN) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::MaxSeqLenParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }
}
