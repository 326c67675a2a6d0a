//! Page wiring configuration.
//!
//! The host page may embed a JSON block
//! (`<script type="application/json" id="showcase-config">`) to rename the
//! selectors or retune timings. Every field is optional; anything missing
//! falls back to the markup contract the stock page ships with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ShowcaseError;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

/// Selectors, observer tuning, and timings for every controller.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub card_selector: String,
    pub hero_selector: String,
    pub title_selector: String,
    pub description_selector: String,
    pub price_selector: String,
    pub action_selector: String,
    pub lazy_image_selector: String,
    pub anchor_selector: String,
    /// Fraction of the target that must be visible before it reveals.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub parallax_speed: f64,
    pub timings: Timings,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            toggle_id: "themeToggle".to_owned(),
            card_selector: ".product-card".to_owned(),
            hero_selector: ".hero".to_owned(),
            title_selector: ".card-title".to_owned(),
            description_selector: ".card-description".to_owned(),
            price_selector: ".price-current".to_owned(),
            action_selector: ".btn-primary".to_owned(),
            lazy_image_selector: "img[loading=\"lazy\"]".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            parallax_speed: 0.5,
            timings: Timings::default(),
        }
    }
}

/// Fixed delays, all in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub press_feedback_ms: u32,
    pub ripple_ms: u32,
    pub notification_enter_ms: u32,
    pub notification_lifetime_ms: u32,
    pub notification_exit_ms: u32,
    pub stagger_step_ms: u32,
    pub load_settle_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            press_feedback_ms: 150,
            ripple_ms: 600,
            notification_enter_ms: 10,
            notification_lifetime_ms: 3000,
            notification_exit_ms: 300,
            stagger_step_ms: 100,
            load_settle_ms: 100,
        }
    }
}

impl ShowcaseConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Config`] when the JSON is malformed or a value
    /// fails [`ShowcaseConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ShowcaseError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ShowcaseError::Config(format!(
                "revealThreshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.parallax_speed.is_finite() {
            return Err(ShowcaseError::Config("parallaxSpeed must be finite".to_owned()));
        }
        let required = [
            ("storageKey", &self.storage_key),
            ("toggleId", &self.toggle_id),
            ("cardSelector", &self.card_selector),
            ("heroSelector", &self.hero_selector),
            ("titleSelector", &self.title_selector),
            ("descriptionSelector", &self.description_selector),
            ("priceSelector", &self.price_selector),
            ("actionSelector", &self.action_selector),
            ("lazyImageSelector", &self.lazy_image_selector),
            ("anchorSelector", &self.anchor_selector),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ShowcaseError::Config(format!("{name} must not be empty")));
        }
        Ok(())
    }

    /// Parse `raw` if present, otherwise defaults. Bad input is logged and
    /// replaced by defaults so a typo never takes the page down.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page config: {err}");
                Self::default()
            }
        }
    }
}
