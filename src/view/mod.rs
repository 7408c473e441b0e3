//! The passenger profile page: routing, session state and display model.

mod card;
pub mod render;
pub mod route;
mod session;

pub use card::{NotFoundCard, PassengerCard, ProfileCard};
pub use render::{render_html, render_text};
pub use route::{passenger_path, NavTarget, PassengerRef, Route};
pub use session::{Gesture, ProfileSession, SessionError, SessionState};
