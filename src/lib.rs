pub mod catalog;
pub mod config;
pub mod directory;
pub mod i18n;
pub mod preferences;
pub mod view;

// Re-export commonly used types for convenience.
pub use catalog::{LocaleCatalog, LocaleCode, Passenger};
pub use config::AppConfig;
pub use directory::ProfileDirectory;
pub use i18n::translate;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use view::{ProfileCard, ProfileSession, Route};
