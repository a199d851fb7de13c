//! Message locale.
//!
//! Only two message languages exist. The exact tag `fr_FR` selects French;
//! every other tag, `fr_CA` and `fr` included, falls back to English.

/// Default locale tag.
pub const FRENCH_TAG: &str = "fr_FR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    French,
    English,
}

/// Locale tag bound to a validator at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(FRENCH_TAG)
    }
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Tag as given by the caller.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> Language {
        if self.tag == FRENCH_TAG {
            Language::French
        } else {
            Language::English
        }
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag)
    }
}
