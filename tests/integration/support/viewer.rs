use passenger_profiles::catalog::{self, LocaleCatalog};
use passenger_profiles::config::{AppConfig, CONFIG_FILE_NAME, PREFERENCES_FILE_NAME};
use passenger_profiles::preferences::FilePreferenceStore;
use passenger_profiles::view::ProfileSession;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated workspace holding a config directory and the bundled catalog.
pub struct ViewerFixture {
    workspace: TempDir,
    pub catalog: LocaleCatalog,
}

impl ViewerFixture {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        let catalog = catalog::embedded().expect("bundled catalog should load");
        Self { workspace, catalog }
    }

    pub fn workspace_path(&self) -> PathBuf {
        self.workspace.path().to_path_buf()
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.workspace.path().join("config").join(PREFERENCES_FILE_NAME)
    }

    pub fn config_path(&self) -> PathBuf {
        self.workspace.path().join("config").join(CONFIG_FILE_NAME)
    }

    /// Starts a fresh session as a new page load would.
    pub fn session(&self) -> ProfileSession<FilePreferenceStore> {
        let settings = AppConfig::load_from(&self.config_path()).expect("config should load");
        let store =
            FilePreferenceStore::open(self.preferences_path()).expect("preferences should open");
        let mut session = ProfileSession::new(store, settings);
        session.attach_catalog(self.catalog.clone());
        session
    }
}
