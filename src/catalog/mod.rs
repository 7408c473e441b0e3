//! Passenger records grouped by locale.
//!
//! A [`LocaleCatalog`] is loaded once from a [`CatalogSource`] and never
//! mutated afterwards. Every locale's sequence is validated when the catalog
//! is built so navigation can rely on identifiers covering `1..=len`.

mod source;

pub use source::{
    embedded, CatalogFormat, CatalogSource, DirectoryCatalogSource, FileCatalogSource,
    StaticCatalogSource,
};

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use thiserror::Error;

use crate::i18n::FALLBACK_LOCALE;

/// One passenger record as it appears in the translation data.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// 1-based identifier, unique within a locale.
    #[serde(rename = "passengerID")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "description", default)]
    pub bio: String,
    /// Image reference; an empty string counts as no image.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub image: Option<String>,
}

impl Passenger {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: String::new(),
            bio: String::new(),
            image: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = (!image.is_empty()).then_some(image);
        self
    }

    /// Image reference, or `default` when the record carries none.
    pub fn image_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(default)
    }
}

/// Upper-cased language/region code such as `EN` or `FR`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn parse(code: &str) -> Result<Self, CatalogError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyLocaleCode);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self(FALLBACK_LOCALE.to_string())
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Problems detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog contains no locales")]
    NoLocales,
    #[error("locale code is empty")]
    EmptyLocaleCode,
    #[error("locale {0} appears more than once")]
    DuplicateLocale(LocaleCode),
    #[error("locale {locale}: passenger identifiers start at 1, found 0")]
    ZeroIdentifier { locale: LocaleCode },
    #[error("locale {locale}: passenger identifier {id} appears more than once")]
    DuplicateIdentifier { locale: LocaleCode, id: u32 },
    #[error("locale {locale}: identifiers must cover 1..={len}, found {id}")]
    NonContiguousIdentifiers { locale: LocaleCode, id: u32, len: usize },
}

/// Immutable mapping from locale code to its ordered passenger sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    locales: BTreeMap<LocaleCode, Vec<Passenger>>,
}

impl LocaleCatalog {
    /// Builds and validates a catalog from raw `(code, passengers)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, Vec<Passenger>)>,
        S: AsRef<str>,
    {
        let mut locales = BTreeMap::new();
        for (code, passengers) in entries {
            let locale = LocaleCode::parse(code.as_ref())?;
            validate_sequence(&locale, &passengers)?;
            if locales.contains_key(&locale) {
                return Err(CatalogError::DuplicateLocale(locale));
            }
            locales.insert(locale, passengers);
        }
        if locales.is_empty() {
            return Err(CatalogError::NoLocales);
        }
        Ok(Self { locales })
    }

    /// Passenger sequence for `locale`, or `None` when the locale is unsupported.
    pub fn passengers(&self, locale: &LocaleCode) -> Option<&[Passenger]> {
        self.locales.get(locale).map(Vec::as_slice)
    }

    pub fn supports(&self, locale: &LocaleCode) -> bool {
        self.locales.contains_key(locale)
    }

    /// Supported locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.locales.keys()
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }
}

fn validate_sequence(locale: &LocaleCode, passengers: &[Passenger]) -> Result<(), CatalogError> {
    let len = passengers.len();
    let mut seen = HashSet::with_capacity(len);
    for passenger in passengers {
        if passenger.id == 0 {
            return Err(CatalogError::ZeroIdentifier {
                locale: locale.clone(),
            });
        }
        if !seen.insert(passenger.id) {
            return Err(CatalogError::DuplicateIdentifier {
                locale: locale.clone(),
                id: passenger.id,
            });
        }
        // Unique and non-zero, so staying within len means dense.
        if passenger.id as usize > len {
            return Err(CatalogError::NonContiguousIdentifiers {
                locale: locale.clone(),
                id: passenger.id,
                len,
            });
        }
    }
    Ok(())
}
