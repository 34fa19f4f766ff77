use leptos::prelude::*;

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// The preference that follows this one when the toggle is clicked.
    pub fn next(&self) -> Self {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

const STORAGE_KEY: &str = "scantriage.theme";

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
/// - light/dark force that palette
/// - system removes the attribute, CSS @media handles it
pub fn apply_theme(theme: Theme) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        if let Some(html) = doc.document_element() {
            match theme {
                Theme::Light | Theme::Dark => {
                    let _ = html.set_attribute("data-theme", theme.as_str());
                }
                Theme::System => {
                    let _ = html.remove_attribute("data-theme");
                }
            }
        }
    }
}

/// Load the saved preference, defaulting to system.
pub fn load_theme() -> Theme {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Persist the preference. Best-effort, like the rest of the DOM interop.
pub fn store_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}
