//! Fixed UI strings shown around the passenger card.
//!
//! Passenger text comes from the catalog; this module only covers the
//! handful of labels the view itself prints. Lookup order is the requested
//! locale, then English, then the key itself, so a translation never comes
//! back empty.

mod strings;

pub use strings::{translate, BIO, FALLBACK_LOCALE, GO_BACK, LANGUAGE, NOT_FOUND};
