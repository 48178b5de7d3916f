//! Bilingual text — the marketing site is served in English and French.

use serde::{Deserialize, Serialize};

/// Languages the site content is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Parse a language tag, defaulting to English for anything unknown.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Fr => f.write_str("fr"),
        }
    }
}

/// A piece of text authored in both languages.
///
/// The French text is optional in practice: [`LocalizedText::get`] falls
/// back to English when the French side is empty, so partially translated
/// content never renders blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub fr: String,
}

impl LocalizedText {
    /// Build from both translations.
    #[must_use]
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
        }
    }

    /// Build from English only, leaving the French side empty.
    #[must_use]
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: String::new(),
        }
    }

    /// Resolve the text for a language, falling back to English when the
    /// requested translation is empty.
    #[must_use]
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr if !self.fr.is_empty() => &self.fr,
            _ => &self.en,
        }
    }

    /// Whether both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.fr.is_empty()
    }
}
