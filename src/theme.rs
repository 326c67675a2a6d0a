//! Light/dark theme preference and its controller.
//!
//! The persisted key-value store is the source of truth; the controller keeps
//! an in-memory copy and mirrors every change onto the document so the
//! `data-theme` attribute and the cached value never disagree after a write.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are best-effort: a failed write is logged and the page
//! keeps the new theme for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::error::ShowcaseError;

/// The two supported themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Persisted and attribute form: `light` or `dark`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings are treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the toggle: names what pressing it will do next.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Keys that activate the toggle when it has focus.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Persistent string store for the preference.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Storage`] when the backend refuses the read.
    fn load(&self, key: &str) -> Result<Option<String>, ShowcaseError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Storage`] when the backend refuses the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError>;
}

/// Session-only store, used when the browser store is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ShowcaseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Where the theme becomes visible: the document attribute and the toggle.
pub trait ThemeSurface {
    fn apply_theme(&mut self, theme: ThemePreference);
    fn set_toggle_label(&mut self, label: &str);
}

/// Owns the current theme and writes it through to store and surface.
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: String,
    current: ThemePreference,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T, key: impl Into<String>) -> Self {
        Self { store, surface, key: key.into(), current: ThemePreference::default() }
    }

    /// Read the persisted preference (default light) and apply it.
    pub fn initialize(&mut self) -> ThemePreference {
        let stored = match self.store.load(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("reading theme preference: {err}");
                None
            }
        };
        let theme = stored
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default();
        self.set_theme(theme);
        theme
    }

    /// Apply `theme` to the document, cache it, persist it, and relabel the
    /// toggle with the opposite action.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.surface.apply_theme(theme);
        self.current = theme;
        if let Err(err) = self.store.save(&self.key, theme.as_str()) {
            log::warn!("theme kept for this session only: {err}");
        }
        self.surface.set_toggle_label(theme.toggle_label());
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}
