//! Client configuration.
//!
//! Resolution order for the service URL: `--remote` flag, `FACEVAULT_REMOTE`
//! env (both handled by clap), then `~/.config/facevault/config.toml`, then
//! the default local service address.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_REMOTE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the vault service.
    pub remote: Url,
    /// Overlay cycle cadence in milliseconds.
    #[serde(default = "default_overlay_interval_ms")]
    pub overlay_interval_ms: u64,
}

fn default_overlay_interval_ms() -> u64 {
    33
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: Url::parse(DEFAULT_REMOTE).expect("default remote is a valid url"),
            overlay_interval_ms: default_overlay_interval_ms(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "facevault").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the config file, falling back to defaults when the file
    /// does not exist. A present-but-broken file is an error; silently
    /// ignoring it would mask typos.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let config = toml::from_str(&raw)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}
