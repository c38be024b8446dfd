//! `KEY=VALUE` env-file loading, applied before [`Config::from_env`](super::Config::from_env).

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::ConfigError;
use crate::constants::DEFAULT_ENV_FILE;

/// Env var naming the file to load. Default: `config.env`.
pub const ENV_FILE_VAR: &str = "GRADER_ENV_FILE";

/// Returns the env-file path from [`ENV_FILE_VAR`], or the default.
pub fn env_file_path() -> PathBuf {
    std::env::var(ENV_FILE_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Loads `KEY=VALUE` lines from `path` into the process environment.
///
/// Blank lines and `#` comments are skipped. Values in the file override variables that are
/// already set. Returns `Ok(false)` if the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.is_file() {
        debug!(path = %path.display(), "Env file not present");
        return Ok(false);
    }

    dotenvy::from_path_override(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Loaded env file");
    Ok(true)
}
