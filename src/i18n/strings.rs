//! Embedded string tables, one per UI language.
//!
//! To add a language, add a table below and an arm in `table_for`. Keys
//! missing from a table fall back to `EN`.

/// Label printed in front of the passenger's bio.
pub const BIO: &str = "Bio";
/// Message shown when the requested passenger does not exist.
pub const NOT_FOUND: &str = "NotFound";
/// Back-navigation affordance on the not-found screen.
pub const GO_BACK: &str = "GoBack";
/// Heading of the language picker.
pub const LANGUAGE: &str = "Language";

/// Locale every lookup falls back to.
pub const FALLBACK_LOCALE: &str = "EN";

/// Translation of `key` for `locale`.
///
/// Falls back to English when the locale or key is unknown, and to `key`
/// itself when English lacks it as well.
pub fn translate<'a>(key: &'a str, locale: &str) -> &'a str {
    if let Some(value) = table_for(locale).and_then(|table| lookup(table, key)) {
        return value;
    }
    lookup(EN, key).unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn table_for(locale: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match locale.trim().to_ascii_uppercase().as_str() {
        "EN" => Some(EN),
        "FR" => Some(FR),
        "ES" => Some(ES),
        "DE" => Some(DE),
        _ => None,
    }
}

const EN: &[(&str, &str)] = &[
    (BIO, "Bio: "),
    (NOT_FOUND, "Passenger not found"),
    (GO_BACK, "Go back"),
    (LANGUAGE, "Language"),
];

const FR: &[(&str, &str)] = &[
    (BIO, "Biographie : "),
    (NOT_FOUND, "Passager introuvable"),
    (GO_BACK, "Retour"),
    (LANGUAGE, "Langue"),
];

const ES: &[(&str, &str)] = &[
    (BIO, "Biografía: "),
    (NOT_FOUND, "Pasajero no encontrado"),
    (GO_BACK, "Volver"),
    (LANGUAGE, "Idioma"),
];

const DE: &[(&str, &str)] = &[
    (BIO, "Biografie: "),
    (NOT_FOUND, "Passagier nicht gefunden"),
    (GO_BACK, "Zurück"),
    (LANGUAGE, "Sprache"),
];
