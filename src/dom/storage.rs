//! `localStorage` store and `<html>` theme surface.

use web_sys::{Element, HtmlElement, Storage, Window};

use crate::error::ShowcaseError;
use crate::theme::{MemoryStore, PreferenceStore, ThemePreference, ThemeSurface};

/// Attribute on `<html>` the stylesheet keys the palette off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Preference store backed by `window.localStorage`, or by memory when the
/// browser denies it (private mode, disabled storage).
pub enum BrowserStore {
    Local(Storage),
    Session(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme is session-only");
                Self::Session(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("localStorage denied; theme is session-only: {}", ShowcaseError::from(err));
                Self::Session(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, ShowcaseError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|err| ShowcaseError::Storage(ShowcaseError::from(err).to_string())),
            Self::Session(memory) => memory.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| ShowcaseError::Storage(ShowcaseError::from(err).to_string())),
            Self::Session(memory) => memory.save(key, value),
        }
    }
}

/// Writes the theme to `<html data-theme>` and relabels the toggle.
pub struct DocumentSurface {
    root: Element,
    toggle: Option<HtmlElement>,
}

impl DocumentSurface {
    pub fn new(root: Element, toggle: Option<HtmlElement>) -> Self {
        Self { root, toggle }
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply_theme(&mut self, theme: ThemePreference) {
        super::report(self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()), "setting data-theme");
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(toggle) = &self.toggle {
            super::report(toggle.set_attribute("aria-label", label), "setting toggle label");
        }
    }
}
