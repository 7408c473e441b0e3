//! TOML-backed preference file living next to `config.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::PreferenceStore;
use crate::config;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Preference store persisted to a TOML file.
///
/// The file is read once on open; every `set` rewrites it.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    contents: PreferenceFile,
}

impl FilePreferenceStore {
    /// Opens the store at `path`; a missing file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences {:?}", path))?;
            toml::from_str(&data)
                .with_context(|| format!("Failed to parse preferences {:?}", path))?
        } else {
            PreferenceFile::default()
        };
        Ok(Self { path, contents })
    }

    /// Opens the store at the workspace's default location.
    pub fn open_default() -> Result<Self> {
        Self::open(config::preferences_file_path()?)
    }

    /// When the file was last written by this crate, if ever.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.contents.updated_at
    }

    fn persist(&self, contents: &PreferenceFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory {:?}", parent))?;
        }
        let data = toml::to_string_pretty(contents)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write preferences {:?}", self.path))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.contents.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Only adopt the new contents once they are on disk.
        let mut contents = self.contents.clone();
        contents.values.insert(key.to_string(), value.to_string());
        contents.updated_at = Some(Utc::now());
        self.persist(&contents)?;
        self.contents = contents;
        debug!("stored preference {key}={value} in {:?}", self.path);
        Ok(())
    }
}
