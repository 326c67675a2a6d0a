//! Reveal-on-scroll and hero parallax wiring.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use super::{OneShotWatcher, listen_passive, on_next_frame, query_all, query_all_html, set_style};
use crate::config::ShowcaseConfig;
use crate::error::ShowcaseError;
use crate::reveal::{FrameGate, ObserverOptions, REVEALED_CLASS, parallax_offset, translate_y};

/// Watch cards and hero for their first appearance. Returns how many elements
/// are being watched.
///
/// # Errors
///
/// [`ShowcaseError::MissingCapability`] when `IntersectionObserver` is
/// missing; parallax is mounted separately and keeps working.
pub fn mount_reveal(window: &Window, document: &Document, config: &ShowcaseConfig) -> Result<usize, ShowcaseError> {
    let options = ObserverOptions::from_config(config);
    let watcher = OneShotWatcher::new(window, Some(&options), |el| {
        super::report(el.class_list().add_1(REVEALED_CLASS), "revealing element");
        log::debug!("revealed <{}>", el.tag_name().to_lowercase());
    })?;

    for card in query_all(document, &config.card_selector)? {
        watcher.observe(&card);
    }
    if let Some(hero) = document.query_selector(&config.hero_selector)? {
        watcher.observe(&hero);
    }
    Ok(watcher.pending())
}

/// Translate the hero against the scroll direction, at most once per frame.
///
/// # Errors
///
/// [`ShowcaseError::Dom`] when the hero cannot be queried or the scroll
/// listener cannot be attached.
pub fn mount_parallax(window: &Window, document: &Document, config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let heroes = Rc::new(query_all_html(document, &config.hero_selector)?);
    if heroes.is_empty() {
        return Ok(());
    }
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let speed = config.parallax_speed;

    let frame_window = window.clone();
    listen_passive(window, "scroll", move |_| {
        if !gate.borrow_mut().request() {
            return;
        }
        let window = frame_window.clone();
        let heroes = Rc::clone(&heroes);
        let gate = Rc::clone(&gate);
        on_next_frame(&frame_window, move || {
            let scrolled = window.scroll_y().unwrap_or(0.0);
            apply_parallax(&heroes, scrolled, speed);
            gate.borrow_mut().complete();
        });
    })
}

fn apply_parallax(heroes: &[HtmlElement], scrolled: f64, speed: f64) {
    let transform = translate_y(parallax_offset(scrolled, speed));
    for hero in heroes {
        set_style(hero, "transform", &transform);
    }
}
