//! Error type shared by the page controllers.
//!
//! Nothing here is ever surfaced to the visitor. Each variant is logged as a
//! warning where the dependent feature gets skipped, and the rest of the page
//! keeps working.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("browser capability unavailable: {0}")]
    MissingCapability(&'static str),
    #[error("expected element not found: {0}")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ShowcaseError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
