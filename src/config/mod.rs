//! Installation settings for the passenger profile viewer.
//!
//! Stored in a TOML file located at:
//!   %APPDATA%/PassengerProfiles/config/config.toml on Windows
//!   $XDG_DATA_HOME/PassengerProfiles/config/config.toml on Linux
//!   ~/Library/Application Support/PassengerProfiles/config/config.toml on macOS
//!
//! `PASSENGER_PROFILES_HOME` overrides the root directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// Standard file name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// File holding the persisted key-value preferences.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";
/// Environment variable overriding the workspace root.
pub const HOME_ENV_VAR: &str = "PASSENGER_PROFILES_HOME";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Locale used when no preference is stored or the stored one is unsupported.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Asset shown for passengers without an image.
    #[serde(default = "default_image")]
    pub default_image: String,
    /// Catalog file or directory; the bundled catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            default_image: default_image(),
            catalog_path: None,
        }
    }
}

fn default_locale() -> String {
    "EN".to_string()
}

fn default_image() -> String {
    "assets/default.png".to_string()
}

impl AppConfig {
    /// Loads the config at `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    }

    /// Writes the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let data = toml::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}

/// Returns the root directory where the viewer stores its files.
///
/// Order of precedence:
/// 1. `PASSENGER_PROFILES_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("PassengerProfiles"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn preferences_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PREFERENCES_FILE_NAME))
}

/// Loads the workspace configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    AppConfig::load_from(&config_file_path()?)
}
