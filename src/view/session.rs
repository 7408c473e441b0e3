//! Profile view state driven by the active locale and requested passenger.

use anyhow::Result;
use log::{debug, info, warn};
use thiserror::Error;

use super::card::{NotFoundCard, PassengerCard, ProfileCard};
use super::route::{NavTarget, PassengerRef, Route};
use crate::catalog::{CatalogError, CatalogSource, LocaleCatalog, LocaleCode};
use crate::config::AppConfig;
use crate::directory::ProfileDirectory;
use crate::i18n::{self, translate};
use crate::preferences::{PreferenceStore, LANGUAGE_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No catalog attached yet.
    Loading,
    /// Catalog attached, no passenger requested.
    Ready,
    Resolved,
    NotFound,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("locale {0} is not offered by the catalog")]
    UnsupportedLocale(LocaleCode),
    #[error("no catalog loaded yet, cannot check locale {0}")]
    CatalogNotLoaded(LocaleCode),
    #[error(transparent)]
    InvalidLocale(#[from] CatalogError),
}

/// Directional input from swipes or arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    NextClick,
    PreviousClick,
}

impl Gesture {
    fn forward(self) -> bool {
        matches!(self, Self::SwipeLeft | Self::NextClick)
    }
}

/// One profile page session.
///
/// The preference store is injected so the locale choice survives across
/// sessions without any global state.
pub struct ProfileSession<S: PreferenceStore> {
    store: S,
    settings: AppConfig,
    catalog: Option<LocaleCatalog>,
    locale: LocaleCode,
    requested: Option<PassengerRef>,
}

impl<S: PreferenceStore> ProfileSession<S> {
    /// Starts a session in the loading state, reading the stored locale.
    pub fn new(store: S, settings: AppConfig) -> Self {
        let locale = store
            .get(LANGUAGE_KEY)
            .and_then(|code| LocaleCode::parse(&code).ok())
            .unwrap_or_else(|| default_locale(&settings));
        debug!("profile session starting with locale {locale}");
        Self {
            store,
            settings,
            catalog: None,
            locale,
            requested: None,
        }
    }

    /// Loads the catalog from `source` and attaches it.
    pub fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<()> {
        let catalog = source.load()?;
        self.attach_catalog(catalog);
        Ok(())
    }

    /// Makes `catalog` the active data, settling on a locale it supports.
    pub fn attach_catalog(&mut self, catalog: LocaleCatalog) {
        if !catalog.supports(&self.locale) {
            let fallback = default_locale(&self.settings);
            let chosen = if catalog.supports(&fallback) {
                fallback
            } else {
                // from_entries never builds an empty catalog
                catalog.locales().next().cloned().unwrap_or(fallback)
            };
            warn!(
                "locale {} not in catalog, using {chosen} instead",
                self.locale
            );
            self.locale = chosen;
        }
        self.catalog = Some(catalog);
    }

    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// Locale codes available for switching, empty while loading.
    pub fn supported_locales(&self) -> Vec<LocaleCode> {
        self.catalog
            .as_ref()
            .map(|c| c.locales().cloned().collect())
            .unwrap_or_default()
    }

    /// Switches the active locale and persists the choice.
    pub fn change_locale(&mut self, code: &str) -> Result<()> {
        let locale = LocaleCode::parse(code).map_err(SessionError::from)?;
        let Some(catalog) = self.catalog.as_ref() else {
            return Err(SessionError::CatalogNotLoaded(locale).into());
        };
        if !catalog.supports(&locale) {
            return Err(SessionError::UnsupportedLocale(locale).into());
        }
        self.store.set(LANGUAGE_KEY, locale.as_str())?;
        info!("locale changed from {} to {locale}", self.locale);
        self.locale = locale;
        Ok(())
    }

    /// Points the session at whatever `route` names.
    pub fn open(&mut self, route: &Route) {
        self.requested = match route {
            Route::Home => None,
            Route::Passenger(passenger) => Some(passenger.clone()),
            Route::Unknown(raw) => Some(PassengerRef::Invalid(raw.clone())),
        };
    }

    pub fn request(&mut self, id: u32) {
        self.requested = Some(PassengerRef::Id(id));
    }

    pub fn requested(&self) -> Option<&PassengerRef> {
        self.requested.as_ref()
    }

    /// Directory for the active locale, once a catalog is attached.
    pub fn directory(&self) -> Option<ProfileDirectory<'_>> {
        let catalog = self.catalog.as_ref()?;
        ProfileDirectory::for_locale(catalog, &self.locale)
    }

    /// Moves to the adjacent passenger and returns where the view should go.
    ///
    /// Returns `None` when there is nothing to move from or to.
    pub fn gesture(&mut self, gesture: Gesture) -> Option<NavTarget> {
        let current = self.requested.as_ref()?.id()?;
        let directory = self.directory()?;
        let target = if gesture.forward() {
            directory.next_id(current)?
        } else {
            directory.previous_id(current)?
        };
        directory.find_by_id(target)?;
        debug!("{gesture:?} from passenger {current} to {target}");
        self.request(target);
        Some(NavTarget::new(target))
    }

    pub fn state(&self) -> SessionState {
        if self.catalog.is_none() {
            return SessionState::Loading;
        }
        match self.card() {
            None => SessionState::Ready,
            Some(ProfileCard::Resolved(_)) => SessionState::Resolved,
            Some(_) => SessionState::NotFound,
        }
    }

    /// Current display model; `None` while loading or with nothing requested.
    pub fn card(&self) -> Option<ProfileCard> {
        let requested = self.requested.as_ref()?;
        let directory = self.directory()?;
        if directory.is_empty() {
            return Some(ProfileCard::Empty(self.not_found_card()));
        }
        let resolved = requested.id().and_then(|id| {
            let passenger = directory.find_by_id(id)?;
            let neighbours = directory.neighbours(id)?;
            Some((passenger, neighbours))
        });
        let Some((passenger, neighbours)) = resolved else {
            debug!("no passenger for {requested:?} in locale {}", self.locale);
            return Some(ProfileCard::NotFound(self.not_found_card()));
        };
        let locale = self.locale.as_str();
        Some(ProfileCard::Resolved(PassengerCard {
            id: passenger.id,
            locale: locale.to_string(),
            name: passenger.name.clone(),
            role: passenger.role.clone(),
            bio_label: translate(i18n::BIO, locale).to_string(),
            bio: passenger.bio.clone(),
            image: passenger.image_or(&self.settings.default_image).to_string(),
            image_alt: passenger.name.clone(),
            previous: NavTarget::new(neighbours.previous_id),
            next: NavTarget::new(neighbours.next_id),
        }))
    }

    fn not_found_card(&self) -> NotFoundCard {
        let locale = self.locale.as_str();
        NotFoundCard {
            locale: locale.to_string(),
            message: translate(i18n::NOT_FOUND, locale).to_string(),
            back_label: translate(i18n::GO_BACK, locale).to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn default_locale(settings: &AppConfig) -> LocaleCode {
    LocaleCode::parse(&settings.default_locale).unwrap_or_default()
}
