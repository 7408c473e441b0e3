//! Loaders that turn translation data on disk into a [`LocaleCatalog`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use super::{LocaleCatalog, Passenger};

/// Bundled demo catalog shipped with the crate.
const EMBEDDED_CATALOG: &str = include_str!("../../data/passengers.json");

/// Anything that can supply a validated catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<LocaleCatalog>;
}

/// Serialization formats accepted for catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, data: &str, path: &Path) -> Result<T> {
        match self {
            Self::Json => serde_json::from_str(data)
                .with_context(|| format!("Failed to parse JSON catalog {:?}", path)),
            Self::Yaml => serde_yaml::from_str(data)
                .with_context(|| format!("Failed to parse YAML catalog {:?}", path)),
        }
    }
}

/// Single file mapping each locale code to its passenger list.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<LocaleCatalog> {
        let path = &self.path;
        let format = CatalogFormat::from_path(path)
            .with_context(|| format!("Unsupported catalog file extension {:?}", path))?;
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {:?}", path))?;
        let raw: BTreeMap<String, Vec<Passenger>> = format.parse(&data, path)?;
        let catalog = LocaleCatalog::from_entries(raw)
            .with_context(|| format!("Invalid catalog file {:?}", path))?;
        debug!(
            "loaded catalog {:?} with {} locale(s)",
            path,
            catalog.locale_count()
        );
        Ok(catalog)
    }
}

/// Directory holding one file per locale, named after the locale code
/// (`EN.json`, `fr.yaml`, ...).
#[derive(Debug, Clone)]
pub struct DirectoryCatalogSource {
    dir: PathBuf,
}

impl DirectoryCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CatalogSource for DirectoryCatalogSource {
    fn load(&self) -> Result<LocaleCatalog> {
        if !self.dir.is_dir() {
            bail!("Catalog directory {:?} does not exist", self.dir);
        }
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let Some(format) = CatalogFormat::from_path(path) else {
                debug!("skipping non-catalog file {:?}", path);
                continue;
            };
            let code = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("Catalog file {:?} has no usable name", path))?
                .to_string();
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file {:?}", path))?;
            let passengers: Vec<Passenger> = format.parse(&data, path)?;
            entries.push((code, passengers));
        }
        let catalog = LocaleCatalog::from_entries(entries)
            .with_context(|| format!("Invalid catalog directory {:?}", self.dir))?;
        debug!(
            "loaded catalog directory {:?} with {} locale(s)",
            self.dir,
            catalog.locale_count()
        );
        Ok(catalog)
    }
}

/// Wraps a catalog that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    catalog: LocaleCatalog,
}

impl StaticCatalogSource {
    pub fn new(catalog: LocaleCatalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> Result<LocaleCatalog> {
        Ok(self.catalog.clone())
    }
}

/// Parses the bundled demo catalog.
pub fn embedded() -> Result<LocaleCatalog> {
    let raw: BTreeMap<String, Vec<Passenger>> =
        serde_json::from_str(EMBEDDED_CATALOG).context("Failed to parse bundled catalog")?;
    Ok(LocaleCatalog::from_entries(raw)?)
}
