//! Write-through persistence for the two UI preferences.
//!
//! Reads never block and never fail: a missing key or disabled storage
//! degrades to the computed default. Writes are fire-and-forget.

use portfolio_shared::prefs::{Language, Theme};
use web_sys::window;

const LANGUAGE_KEY: &str = "language";
const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Persisted language, or `en` when nothing usable is stored.
pub fn load_language() -> Language {
    local_storage()
        .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten())
        .and_then(|value| Language::parse(&value))
        .unwrap_or_default()
}

/// Persist the language selection under its storage key.
pub fn store_language(language: Language) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, language.as_str());
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Persisted theme; falls back to the OS dark-mode signal when nothing is
/// stored.
pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_else(|| {
            if system_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Persist the theme selection under its storage key.
pub fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

/// Mirror the active theme onto the root element so stylesheets can key
/// off `data-theme`.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}
