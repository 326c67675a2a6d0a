//! Theme toggle wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

use super::storage::{BrowserStore, DocumentSurface};
use super::{after, listen, set_style};
use crate::config::ShowcaseConfig;
use crate::error::ShowcaseError;
use crate::theme::{ThemeController, ThemePreference, is_toggle_key};

const PRESS_TRANSFORM: &str = "scale(0.95)";

type BrowserThemeController = ThemeController<BrowserStore, DocumentSurface>;

/// Apply the persisted theme and wire the toggle control.
///
/// The stored theme is applied even when the toggle is missing; only the
/// wiring is skipped.
///
/// # Errors
///
/// [`ShowcaseError::MissingElement`] without `<html>`;
/// [`ShowcaseError::Dom`] when a toggle listener cannot be attached.
pub fn mount(window: &Window, document: &Document, config: &ShowcaseConfig) -> Result<ThemePreference, ShowcaseError> {
    let root = document
        .document_element()
        .ok_or_else(|| ShowcaseError::MissingElement("<html>".to_owned()))?;
    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let surface = DocumentSurface::new(root, toggle.clone());
    let mut controller = ThemeController::new(BrowserStore::open(window), surface, config.storage_key.clone());
    let initial = controller.initialize();

    let Some(toggle) = toggle else {
        log::warn!("{}", ShowcaseError::MissingElement(format!("#{}", config.toggle_id)));
        return Ok(initial);
    };

    let controller = Rc::new(RefCell::new(controller));
    let feedback_ms = config.timings.press_feedback_ms;

    let ctl = Rc::clone(&controller);
    let button = toggle.clone();
    listen(&toggle, "click", move |_| {
        toggle_with_feedback(&ctl, &button, feedback_ms);
    })?;

    let ctl = Rc::clone(&controller);
    let button = toggle.clone();
    listen(&toggle, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_toggle_key(&key_event.key()) {
            event.prevent_default();
            toggle_with_feedback(&ctl, &button, feedback_ms);
        }
    })?;

    Ok(initial)
}

fn toggle_with_feedback(controller: &Rc<RefCell<BrowserThemeController>>, button: &HtmlElement, feedback_ms: u32) {
    let next = controller.borrow_mut().toggle_theme();
    log::debug!("theme switched to {}", next.as_str());

    set_style(button, "transform", PRESS_TRANSFORM);
    let button = button.clone();
    after(feedback_ms, move || set_style(&button, "transform", ""));
}
