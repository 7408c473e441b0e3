use std::fs;

use anyhow::Result;
use passenger_profiles::catalog::{CatalogSource, FileCatalogSource, LocaleCode};
use passenger_profiles::view::{ProfileCard, ProfileSession, Route};
use passenger_profiles::config::AppConfig;
use passenger_profiles::preferences::MemoryPreferenceStore;
use tempfile::TempDir;

#[test]
fn session_loads_catalog_from_json_file() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("translations.json");
    fs::write(
        &path,
        r#"{
            "en": [
                {"passengerID": 2, "name": "Bo", "role": "Stoker", "description": "Shovels coal"},
                {"passengerID": 1, "name": "Ada", "role": "Cook", "description": "Makes soup", "image": "ada.png"}
            ],
            "es": [
                {"passengerID": 1, "name": "Ada", "role": "Cocinera", "description": "Hace sopa"},
                {"passengerID": 2, "name": "Bo", "role": "Fogonero", "description": "Palea carbón"}
            ]
        }"#,
    )?;

    let source = FileCatalogSource::new(&path);
    let catalog = source.load()?;
    let codes: Vec<&str> = catalog.locales().map(LocaleCode::as_str).collect();
    assert_eq!(codes, vec!["EN", "ES"]);

    let store = MemoryPreferenceStore::new();
    let mut session = ProfileSession::new(store, AppConfig::default());
    session.load_catalog(&source)?;
    session.change_locale("es")?;
    session.open(&Route::passenger(2));

    let Some(ProfileCard::Resolved(card)) = session.card() else {
        panic!("passenger 2 should resolve");
    };
    assert_eq!(card.role, "Fogonero");
    assert_eq!(card.bio_label, "Biografía: ");
    assert_eq!(card.previous.id, 1);
    assert_eq!(card.next.id, 1);
    Ok(())
}

#[test]
fn gapped_identifiers_fail_to_load() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("translations.json");
    fs::write(
        &path,
        r#"{"EN": [{"passengerID": 1, "name": "Ada"}, {"passengerID": 5, "name": "Bo"}]}"#,
    )?;
    let mut session = ProfileSession::new(MemoryPreferenceStore::new(), AppConfig::default());
    let err = session
        .load_catalog(&FileCatalogSource::new(&path))
        .unwrap_err();
    assert!(format!("{err:#}").contains("identifiers must cover 1..=2"));
    assert!(session.card().is_none());
    Ok(())
}
