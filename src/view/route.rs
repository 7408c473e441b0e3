//! Paths understood by the profile view.

use std::fmt;

use serde::Serialize;

/// Path prefix of a passenger profile page.
pub const PASSENGER_PREFIX: &str = "/passenger/";

/// Builds the navigation target for passenger `id`.
pub fn passenger_path(id: u32) -> String {
    format!("{PASSENGER_PREFIX}{id}")
}

/// Identifier segment of a passenger path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassengerRef {
    Id(u32),
    /// Segment that is not a positive integer; always resolves to not-found.
    Invalid(String),
}

impl PassengerRef {
    pub fn parse(segment: &str) -> Self {
        match segment.trim().parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Invalid(segment.to_string()),
        }
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Passenger(PassengerRef),
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self::Home;
        }
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed.strip_prefix(PASSENGER_PREFIX) {
            Some(segment) if !segment.contains('/') => Self::Passenger(PassengerRef::parse(segment)),
            _ => Self::Unknown(path.to_string()),
        }
    }

    pub fn passenger(id: u32) -> Self {
        Self::Passenger(PassengerRef::Id(id))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Passenger(PassengerRef::Id(id)) => write!(f, "{PASSENGER_PREFIX}{id}"),
            Self::Passenger(PassengerRef::Invalid(raw)) => write!(f, "{PASSENGER_PREFIX}{raw}"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Where a navigation affordance leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTarget {
    pub id: u32,
    pub path: String,
}

impl NavTarget {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            path: passenger_path(id),
        }
    }
}
