//! Persisted UI preference values.
//!
//! Two independent dimensions, each with exactly one active value. The
//! frontend mirrors them to local storage under the `"language"` and
//! `"theme"` keys; unknown persisted strings fall back to the default.

use serde::{Deserialize, Serialize};

/// Content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Macedonian.
    #[serde(rename = "mk")]
    Mk,
}

impl Language {
    /// Storage representation, also the document key.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Mk => "mk",
        }
    }

    /// Parse a persisted value; anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "mk" => Some(Language::Mk),
            _ => None,
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Light theme.
    #[default]
    #[serde(rename = "light")]
    Light,
    /// Dark theme.
    #[serde(rename = "dark")]
    Dark,
}

impl Theme {
    /// Storage representation, also the root `data-theme` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_storage_string() {
        for language in [Language::En, Language::Mk] {
            assert_eq!(Language::parse(language.as_str()), Some(language));
        }
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse("fr").unwrap_or_default(), Language::En);
    }

    #[test]
    fn theme_round_trips_through_storage_string() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn theme_toggle_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn setting_same_value_twice_is_idempotent() {
        // Value semantics: applying the same selection twice produces the
        // same state and the same persisted string as applying it once.
        let first = Language::Mk;
        let second = Language::parse(first.as_str()).unwrap_or_default();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), second.as_str());
    }
}
