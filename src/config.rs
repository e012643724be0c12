use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::number::VersionNumberType;

/// Application name used for the data directory and log file
pub const APP_NAME: &str = "app-version-validator";

/// User agent sent with every remote request
pub const USER_AGENT: &str = concat!("app-version-validator/", env!("CARGO_PKG_VERSION"));

/// Metadata key holding the device version string
pub const DEFAULT_VERSION_KEY: &str = "CFBundleShortVersionString";

/// Timeout for the remote fetch in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validator configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Endpoint returning the online version payload
    pub remote_url: Option<String>,
    /// Component that decides whether an update is required
    pub version_number_type: VersionNumberType,
    /// Metadata key holding the device version string
    pub version_key: String,
    /// Remote fetch timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            remote_url: None,
            version_number_type: VersionNumberType::default(),
            version_key: DEFAULT_VERSION_KEY.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ValidatorConfig {
    /// Reads a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reads a JSON config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the path to the data directory for app-version-validator.
/// Uses $XDG_DATA_HOME/app-version-validator if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/app-version-validator,
/// or ./app-version-validator if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_NAME)
}
