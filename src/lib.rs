//! # showcase
//!
//! WASM front-end effects for the product showcase page: a persisted
//! light/dark theme toggle, reveal-on-scroll, hero parallax, card hover and
//! ripple feedback, product notifications, lazy images, keyboard access, and
//! reduced-motion support.
//!
//! The page markup is served as-is; this crate attaches behavior to it.
//! Decision logic lives in plain modules that build and test natively, and
//! the `hydrate` feature adds the `dom` bindings plus the start-up entry.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, observer tuning, and timings |
//! | [`error`] | Shared error type, logged and never surfaced |
//! | [`theme`] | Theme preference, store/surface traits, controller |
//! | [`reveal`] | One-shot watch set, parallax math, frame gate |
//! | [`interaction`] | Card, ripple, notification, motion, image helpers |
//! | [`style`] | Stylesheet injected at start-up |
//! | `dom` | Browser bindings (`hydrate` only) |

pub mod config;
pub mod error;
pub mod interaction;
pub mod reveal;
pub mod style;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry: install logging, then wire the page once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("showcase disabled: {err}");
            return;
        }
    };

    if interaction::is_document_parsed(&document.ready_state()) {
        run();
        return;
    }
    let mut pending = Some(run as fn());
    if let Err(err) = dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(run) = pending.take() {
            run();
        }
    }) {
        log::warn!("showcase disabled: {err}");
    }
}

#[cfg(feature = "hydrate")]
fn run() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("showcase disabled: {err}");
            return;
        }
    };

    let raw_config = document
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = config::ShowcaseConfig::load_or_default(raw_config.as_deref());

    if let Err(err) = inject_styles(&document) {
        log::warn!("effects stylesheet: {err}");
    }

    let applied = dom::theme::mount(&window, &document, &config);
    let revealed = dom::reveal::mount_reveal(&window, &document, &config);
    let parallax = dom::reveal::mount_parallax(&window, &document, &config);
    let cards = dom::interaction::mount_cards(&document, &config);
    let motion = dom::interaction::mount_reduced_motion(&window, &document);
    let lazy = dom::interaction::mount_lazy_images(&window, &document, &config);
    let images = dom::interaction::mount_image_fallbacks(&document);
    let settle = dom::interaction::mount_load_settle(&window, &document, &config);
    let anchors = dom::interaction::mount_anchors(&document, &config);

    let applied = skip_on_err("theme toggle", applied);
    skip_on_err("reveal on scroll", revealed);
    skip_on_err("parallax", parallax);
    let cards = skip_on_err("cards", cards).unwrap_or(0);
    skip_on_err("reduced motion", motion);
    let lazy = skip_on_err("lazy images", lazy).unwrap_or(0);
    skip_on_err("image fallbacks", images);
    skip_on_err("load settle", settle);
    let anchors = skip_on_err("anchors", anchors).unwrap_or(0);

    log::info!(
        "showcase ready: theme={} cards={cards} lazy_images={lazy} anchors={anchors}",
        applied.map_or("unset", theme::ThemePreference::as_str)
    );
}

#[cfg(feature = "hydrate")]
fn skip_on_err<T>(feature: &str, result: Result<T, error::ShowcaseError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{feature} skipped: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn inject_styles(document: &web_sys::Document) -> Result<(), error::ShowcaseError> {
    if document.get_element_by_id(style::STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| error::ShowcaseError::MissingElement("<head>".to_owned()))?;
    let el = document.create_element("style")?;
    el.set_id(style::STYLE_ELEMENT_ID);
    el.set_text_content(Some(&style::effects_css()));
    head.append_child(&el)?;
    Ok(())
}
