//! Persistent user configuration: the Gemini API key and message preferences.
//!
//! Stored as pretty-printed JSON at `~/gemini-commit-config.json`:
//!
//! ```json
//! {
//!   "apiKey": "...",
//!   "useEmojis": true
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ConfigError;

/// File name of the configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = "gemini-commit-config.json";

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub use_emojis: bool,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    pub fn new(api_key: impl Into<String>, use_emojis: bool) -> Self {
        Self {
            api_key: api_key.into(),
            use_emojis,
            model: default_model(),
        }
    }
}

/// Source of the loaded configuration.
///
/// The generator and workflows receive one of these instead of reading the
/// file themselves, so the file is read in exactly one place.
pub trait ConfigProvider {
    fn config(&self) -> Result<Config, ConfigError>;
}

impl ConfigProvider for Config {
    fn config(&self) -> Result<Config, ConfigError> {
        Ok(self.clone())
    }
}

/// File-backed configuration store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location.
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(default_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the configuration file.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(&self.path).map_err(|e| ConfigError::Missing {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let config: Config = serde_json::from_str(&data).map_err(|e| ConfigError::Missing {
            path: self.path.clone(),
            reason: format!("invalid JSON: {e}"),
        })?;

        if config.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: self.path.clone(),
            });
        }

        debug!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Write the configuration, replacing any previous file atomically.
    ///
    /// The JSON is written to a temporary file next to the target and renamed
    /// over it, so an interrupted write leaves the old file intact.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let write_failed = |source: std::io::Error| ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| write_failed(std::io::Error::other(e)))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_failed)?;
        tmp.write_all(json.as_bytes()).map_err(write_failed)?;
        tmp.write_all(b"\n").map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;
        tmp.persist(&self.path).map_err(|e| write_failed(e.error))?;

        debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

impl ConfigProvider for ConfigStore {
    fn config(&self) -> Result<Config, ConfigError> {
        self.load()
    }
}

/// `~/gemini-commit-config.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::HomeNotFound)
}
