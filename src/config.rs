//! API key configuration
//!
//! The key is read from `EKILEX_API_KEY`, then from a `config` file in the
//! working directory, then from the per-user config directory
//! (`~/.config/sonaveeb/config` on Linux). Only the first line of a config
//! file is used.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "EKILEX_API_KEY";

/// Name of the config file, both locally and in the user config directory
const CONFIG_FILE: &str = "config";

/// Errors in resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in the environment or any config file
    #[error("EKILEX_API_KEY not set (use the env var or ~/.config/sonaveeb/config)")]
    MissingApiKey,
}

/// Resolves the API key from the environment and config files
pub fn resolve_api_key() -> Result<String, ConfigError> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    api_key_from(env_key, &config_file_candidates())
}

/// Config files to consult, in priority order
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dirs) = ProjectDirs::from("", "", "sonaveeb") {
        candidates.push(dirs.config_dir().join(CONFIG_FILE));
    }
    candidates
}

fn api_key_from(env_key: Option<String>, files: &[PathBuf]) -> Result<String, ConfigError> {
    env_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .or_else(|| files.iter().find_map(|path| read_key_from_file(path)))
        .ok_or(ConfigError::MissingApiKey)
}

/// Reads the trimmed first line of a file, if it exists and is not blank
pub fn read_key_from_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let key = content.lines().next()?.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
