use anyhow::Result;
use passenger_profiles::config::AppConfig;
use passenger_profiles::preferences::{PreferenceStore, LANGUAGE_KEY};
use passenger_profiles::view::Route;

use crate::support::viewer::ViewerFixture;

#[test]
fn preferred_locale_survives_reload() -> Result<()> {
    let fixture = ViewerFixture::new();

    let mut first = fixture.session();
    assert_eq!(first.locale().as_str(), "EN");
    first.change_locale("FR")?;
    drop(first);

    let mut second = fixture.session();
    assert_eq!(second.locale().as_str(), "FR");
    assert_eq!(second.store().get(LANGUAGE_KEY).as_deref(), Some("FR"));

    second.open(&Route::passenger(1));
    let card = second.card().expect("passenger requested");
    let passenger = card.passenger().expect("passenger 1 resolves");
    assert_eq!(passenger.role, "Capitaine");
    assert_eq!(passenger.bio_label, "Biographie : ");
    Ok(())
}

#[test]
fn unsupported_locale_is_rejected_and_not_stored() {
    let fixture = ViewerFixture::new();
    let mut session = fixture.session();
    assert!(session.change_locale("JA").is_err());
    drop(session);

    let reloaded = fixture.session();
    assert_eq!(reloaded.locale().as_str(), "EN");
    assert!(!fixture.preferences_path().exists());
}

#[test]
fn configured_default_locale_applies_without_preference() -> Result<()> {
    let fixture = ViewerFixture::new();
    AppConfig {
        default_locale: "fr".into(),
        ..AppConfig::default()
    }
    .save_to(&fixture.config_path())?;

    let session = fixture.session();
    assert_eq!(session.locale().as_str(), "FR");
    assert!(fixture.workspace_path().join("config").exists());
    Ok(())
}
