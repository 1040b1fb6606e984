//! Theme preference resolution, application, and persistence.
//!
//! Reads the visitor's preference from `localStorage`, falls back to the OS
//! color-scheme signal, and applies a `data-theme` attribute to the `<html>`
//! element. Toggling writes the new value back to `localStorage` and updates
//! that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds safely
//! no-op so the resolution rules stay testable off-wasm.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::state::settings::Settings;

/// localStorage key holding the persisted preference.
pub const STORAGE_KEY: &str = "saastra-theme";

/// Visual theme for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted to storage and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Inverse of [`Theme::as_str`]. Anything unrecognized counts as
    /// "no stored preference".
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn invert(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Resolve the effective theme from a stored preference and the OS signal.
///
/// A stored preference always wins; the OS color-scheme signal applies only
/// when nothing was persisted.
pub fn resolve(persisted: Option<Theme>, os_dark: bool) -> Theme {
    persisted.unwrap_or(if os_dark { Theme::Dark } else { Theme::Light })
}

/// Read the persisted preference and the OS signal, then resolve them.
///
/// Storage absence or access failure is treated as "no persisted value";
/// nothing is written back at load time.
pub fn load() -> Theme {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::default(),
        };

        // Check localStorage first.
        let mut persisted = None;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                persisted = Theme::parse(&val);
            }
        }

        // Fall back to system preference.
        let os_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        resolve(persisted, os_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Invert the current theme, apply it, and persist the new preference.
///
/// This is the single writer of [`Settings::theme`] after initialization;
/// components call this instead of updating the settings signal directly.
pub fn toggle(settings: RwSignal<Settings>) {
    let next = settings.get_untracked().theme.invert();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    settings.update(|s| s.theme = next);
}
