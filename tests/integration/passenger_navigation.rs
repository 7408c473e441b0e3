use anyhow::Result;
use passenger_profiles::catalog::LocaleCode;
use passenger_profiles::directory::ProfileDirectory;
use passenger_profiles::i18n::{translate, NOT_FOUND};
use passenger_profiles::view::{Gesture, ProfileCard, Route, SessionState};

use crate::support::viewer::ViewerFixture;

#[test]
fn english_catalog_wraps_and_resolves() -> Result<()> {
    let fixture = ViewerFixture::new();
    let en = LocaleCode::parse("EN")?;
    let dir = ProfileDirectory::for_locale(&fixture.catalog, &en).expect("EN is bundled");

    assert_eq!(dir.len(), 5);
    assert_eq!(dir.next_id(5), Some(1));
    assert_eq!(dir.previous_id(1), Some(5));

    let third = dir.find_by_id(3).expect("passenger 3 exists");
    assert_eq!(third.name, "Hilda Marsh");
    assert_eq!(third.role, "Botanist");
    assert!(third.bio.starts_with("Travels with forty crates"));

    assert!(dir.find_by_id(99).is_none());
    assert_eq!(translate(NOT_FOUND, "EN"), "Passenger not found");
    Ok(())
}

#[test]
fn session_shows_not_found_for_unknown_passenger() {
    let fixture = ViewerFixture::new();
    let mut session = fixture.session();
    session.open(&Route::parse("/passenger/99"));

    assert_eq!(session.state(), SessionState::NotFound);
    match session.card() {
        Some(ProfileCard::NotFound(card)) => {
            assert_eq!(card.message, "Passenger not found");
            assert_eq!(card.back_label, "Go back");
        }
        other => panic!("expected not-found card, got {other:?}"),
    }
}

#[test]
fn swiping_cycles_through_every_passenger() {
    let fixture = ViewerFixture::new();
    let mut session = fixture.session();
    session.open(&Route::parse("/passenger/1"));

    let mut seen = vec![1];
    for _ in 0..5 {
        let target = session
            .gesture(Gesture::SwipeLeft)
            .expect("every passenger has a successor");
        seen.push(target.id);
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 1]);

    let back = session.gesture(Gesture::SwipeRight).expect("predecessor");
    assert_eq!(back.path, "/passenger/5");
}

#[test]
fn missing_image_uses_default_asset() {
    let fixture = ViewerFixture::new();
    let mut session = fixture.session();
    session.request(3);
    let card = session.card().expect("passenger requested");
    let passenger = card.passenger().expect("passenger 3 resolves");
    assert_eq!(passenger.image, "assets/default.png");
    assert_eq!(passenger.image_alt, "Hilda Marsh");

    session.request(1);
    let card = session.card().expect("passenger requested");
    assert_eq!(
        card.passenger().map(|p| p.image.as_str()),
        Some("assets/passengers/whitcombe.png")
    );
}
