//! The two persisted page modes: display theme and locale.
//!
//! Both are closed two-value enums. Parsing only accepts the exact tokens
//! written by [`DisplayMode::as_str`] / [`Locale::as_str`]; anything else is
//! treated as absent so callers fall back to the default.

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;

/// Storage key for the display mode.
pub const THEME_KEY: &str = "theme";
/// Storage key for the locale.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the document-wide `data-theme` attribute.
    pub fn data_theme(self) -> &'static str {
        self.as_str()
    }

    /// Glyph shown on the theme toggle: the mode you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi bi-moon",
            Self::Dark => "bi bi-sun",
        }
    }

    /// Persisted mode, or light when absent/unrecognized.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub fn lang(self) -> &'static str {
        self.as_str()
    }

    /// Label of the language toggle. It always names the *other* locale.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "العربية",
            Self::Ar => "English",
        }
    }

    /// Persisted locale, or English when absent/unrecognized.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(LANGUAGE_KEY)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}
