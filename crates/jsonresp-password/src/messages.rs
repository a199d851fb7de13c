//! Localized rejection reasons.
//!
//! A failed check always yields, in order:
//! 1. the header
//! 2. the minimum length line
//! 3. one line per required class: uppercase, then digit, then symbol
//!
//! The maximum length is never mentioned.

use crate::config::PolicyConfig;
use crate::locale::{Language, Locale};

struct Catalog {
    header: &'static str,
    min_length: fn(usize) -> String,
    uppercase: &'static str,
    digit: &'static str,
    symbol: &'static str,
}

static FRENCH: Catalog = Catalog {
    header: "Mot de passe invalide",
    min_length: french_min_length,
    uppercase: "- 1 majuscule requise",
    digit: "- 1 chiffre requis",
    symbol: "- 1 symbole requise",
};

static ENGLISH: Catalog = Catalog {
    header: "Invalid Password",
    min_length: english_min_length,
    uppercase: "uppercases required",
    digit: "digits required",
    symbol: "symbols required",
};

fn french_min_length(min: usize) -> String {
    format!("-{} caractères minimum", min)
}

fn english_min_length(min: usize) -> String {
    format!("- at least {} characters long", min)
}

fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::French => &FRENCH,
        Language::English => &ENGLISH,
    }
}

/// Reasons explaining why a candidate failed `config`, in `locale`.
pub fn localized_messages(config: &PolicyConfig, locale: &Locale) -> Vec<String> {
    let catalog = catalog(locale.language());

    let mut messages = vec![
        catalog.header.to_string(),
        (catalog.min_length)(config.min_length()),
    ];
    if config.require_uppercase() {
        messages.push(catalog.uppercase.to_string());
    }
    if config.require_digit() {
        messages.push(catalog.digit.to_string());
    }
    if config.require_symbol() {
        messages.push(catalog.symbol.to_string());
    }
    messages
}
