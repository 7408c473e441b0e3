//! Display model handed to whatever draws the profile page.

use serde::Serialize;

use super::route::NavTarget;

/// What the profile page should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileCard {
    Resolved(PassengerCard),
    NotFound(NotFoundCard),
    /// The active locale has no passengers at all.
    Empty(NotFoundCard),
}

impl ProfileCard {
    pub fn passenger(&self) -> Option<&PassengerCard> {
        match self {
            Self::Resolved(card) => Some(card),
            _ => None,
        }
    }
}

/// Bio card for a resolved passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerCard {
    pub id: u32,
    pub locale: String,
    pub name: String,
    pub role: String,
    pub bio_label: String,
    pub bio: String,
    /// Passenger image, or the configured default asset.
    pub image: String,
    pub image_alt: String,
    pub previous: NavTarget,
    pub next: NavTarget,
}

/// Fallback shown when nothing matches the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundCard {
    pub locale: String,
    pub message: String,
    pub back_label: String,
}
