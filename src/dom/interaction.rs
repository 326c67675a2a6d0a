//! Card, image, motion, and anchor wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::{OneShotWatcher, after, listen, query_all, query_all_html, report, set_style};
use crate::config::{ShowcaseConfig, Timings};
use crate::error::ShowcaseError;
use crate::interaction::{
    ANIMATION_DURATION_VAR, FALLBACK_STYLES, FALLBACK_TEXT, HOVER_TRANSFORM, LAZY_CLASS, NOTIFICATION_HIDDEN_TRANSFORM,
    NOTIFICATION_SHOWN_TRANSFORM, Notification, ProductSummary, REDUCED_MOTION_QUERY, Rect, RippleGeometry,
    SETTLED_TRANSFORM, anchor_target, duration_override, fallback_class, fallback_label, is_card_activation_key,
    is_document_complete, lazy_source, needs_decode_check, notification_css, notification_lines, settle_delay_ms,
    stagger_delay,
};

const NOTIFICATION_CLASS: &str = "showcase-notification";

// ── Cards ───────────────────────────────────────────────────────

/// Wire every card: stagger, hover, focusability, Enter delegation, and the
/// primary action. Returns the number of cards found. A card that cannot be
/// fully wired is logged and skipped; the rest are still wired.
///
/// # Errors
///
/// [`ShowcaseError::Dom`] when the card selector cannot be queried.
pub fn mount_cards(document: &Document, config: &ShowcaseConfig) -> Result<usize, ShowcaseError> {
    let cards = query_all_html(document, &config.card_selector)?;
    let config = Rc::new(config.clone());

    for (index, card) in cards.iter().enumerate() {
        if let Err(err) = wire_card(document, card, index, &config) {
            log::warn!("card {index} skipped: {err}");
        }
    }
    Ok(cards.len())
}

fn wire_card(document: &Document, card: &HtmlElement, index: usize, config: &Rc<ShowcaseConfig>) -> Result<(), ShowcaseError> {
    set_style(card, "animation-delay", &stagger_delay(index, config.timings.stagger_step_ms));
    report(card.set_attribute("tabindex", "0"), "card tabindex");
    report(card.set_attribute("role", "article"), "card role");
    wire_hover(card)?;

    let action = primary_action(card, &config.action_selector)?
        .ok_or_else(|| ShowcaseError::MissingElement(config.action_selector.clone()))?;
    wire_enter_delegation(card, &action)?;
    wire_action(document, card, &action, config)
}

fn primary_action(card: &HtmlElement, selector: &str) -> Result<Option<HtmlElement>, ShowcaseError> {
    Ok(card
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn wire_hover(card: &HtmlElement) -> Result<(), ShowcaseError> {
    let target = card.clone();
    listen(card, "mouseenter", move |_| set_style(&target, "transform", HOVER_TRANSFORM))?;
    let target = card.clone();
    listen(card, "mouseleave", move |_| set_style(&target, "transform", ""))
}

/// Enter on the card itself clicks its primary action. Enter on the action
/// (which bubbles here) is left to the browser's native activation.
fn wire_enter_delegation(card: &HtmlElement, action: &HtmlElement) -> Result<(), ShowcaseError> {
    let card_target = card.clone();
    let action = action.clone();
    listen(card, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let on_card = event
            .target()
            .is_some_and(|target| &target == AsRef::<EventTarget>::as_ref(&card_target));
        if on_card && is_card_activation_key(&key_event.key()) {
            action.click();
        }
    })
}

fn wire_action(
    document: &Document,
    card: &HtmlElement,
    action: &HtmlElement,
    config: &Rc<ShowcaseConfig>,
) -> Result<(), ShowcaseError> {
    let document = document.clone();
    let card = card.clone();
    let button = action.clone();
    let config = Rc::clone(config);
    listen(action, "click", move |event| {
        event.prevent_default();
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            if let Err(err) = spawn_ripple(&document, &button, mouse, config.timings.ripple_ms) {
                log::warn!("ripple: {err}");
            }
        }
        match read_summary(&card, &config) {
            Ok(summary) => {
                if let Err(err) = show_notification(&document, &summary, &config.timings) {
                    log::warn!("notification: {err}");
                }
            }
            Err(err) => log::warn!("card summary: {err}"),
        }
    })
}

fn spawn_ripple(
    document: &Document,
    button: &HtmlElement,
    event: &MouseEvent,
    duration_ms: u32,
) -> Result<(), ShowcaseError> {
    let bounds = button.get_bounding_client_rect();
    let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
    // `detail() == 0` marks a synthetic click (keyboard or `click()`), which
    // carries no pointer position.
    let geometry = if event.detail() == 0 {
        RippleGeometry::centered(rect)
    } else {
        RippleGeometry::from_click(rect, f64::from(event.client_x()), f64::from(event.client_y()))
    };

    let ripple = document.create_element("span")?;
    ripple.set_attribute("style", &geometry.css_text(duration_ms))?;
    set_style(button, "position", "relative");
    set_style(button, "overflow", "hidden");
    button.append_child(&ripple)?;
    after(duration_ms, move || ripple.remove());
    Ok(())
}

fn text_of(card: &HtmlElement, selector: &str) -> Result<String, ShowcaseError> {
    card.query_selector(selector)?
        .and_then(|el| el.text_content())
        .ok_or_else(|| ShowcaseError::MissingElement(selector.to_owned()))
}

fn read_summary(card: &HtmlElement, config: &ShowcaseConfig) -> Result<ProductSummary, ShowcaseError> {
    Ok(ProductSummary::new(
        &text_of(card, &config.title_selector)?,
        &text_of(card, &config.description_selector)?,
        &text_of(card, &config.price_selector)?,
    ))
}

// ── Notification ────────────────────────────────────────────────

type ClickHolder = Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>>;

fn append_text(document: &Document, parent: &Element, tag: &str, text: &str) -> Result<(), ShowcaseError> {
    let el = document.create_element(tag)?;
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(())
}

/// Slide a product popup in from the right; it leaves after the configured
/// lifetime or on click, whichever comes first.
fn show_notification(document: &Document, summary: &ProductSummary, timings: &Timings) -> Result<(), ShowcaseError> {
    let body = document
        .body()
        .ok_or_else(|| ShowcaseError::MissingElement("<body>".to_owned()))?;

    let popup = document.create_element("div")?.unchecked_into::<HtmlElement>();
    popup.set_class_name(NOTIFICATION_CLASS);
    popup.set_attribute("style", &notification_css(timings.notification_exit_ms))?;
    popup.set_attribute("role", "status")?;
    popup.set_attribute("aria-live", "polite")?;
    for (tag, text) in notification_lines(summary) {
        append_text(document, &popup, tag, &text)?;
    }

    let state = Rc::new(RefCell::new(Notification::new()));
    let on_click: ClickHolder = Rc::new(RefCell::new(None));
    let exit_ms = timings.notification_exit_ms;

    {
        let popup_for_cb = popup.clone();
        let state = Rc::clone(&state);
        let holder = Rc::clone(&on_click);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_| {
            dismiss(&popup_for_cb, &state, &holder, exit_ms);
        });
        popup.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        *on_click.borrow_mut() = Some(callback);
    }

    // Attach only once it can be dismissed, so a failure above leaves nothing behind.
    if let Err(err) = body.append_child(&popup) {
        on_click.borrow_mut().take();
        return Err(err.into());
    }

    after(timings.notification_enter_ms, {
        let popup = popup.clone();
        let state = Rc::clone(&state);
        move || {
            if state.borrow_mut().show() {
                set_style(&popup, "transform", NOTIFICATION_SHOWN_TRANSFORM);
            }
        }
    });
    after(timings.notification_lifetime_ms, move || dismiss(&popup, &state, &on_click, exit_ms));
    Ok(())
}

fn dismiss(popup: &HtmlElement, state: &Rc<RefCell<Notification>>, on_click: &ClickHolder, exit_ms: u32) {
    if !state.borrow_mut().dismiss() {
        return;
    }
    set_style(popup, "transform", NOTIFICATION_HIDDEN_TRANSFORM);

    let popup = popup.clone();
    let state = Rc::clone(state);
    let on_click = Rc::clone(on_click);
    after(exit_ms, move || {
        if !state.borrow_mut().finish() {
            return;
        }
        if let Some(callback) = on_click.borrow_mut().take() {
            report(
                popup.remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref()),
                "detaching notification listener",
            );
        }
        popup.remove();
    });
}

// ── Reduced motion ──────────────────────────────────────────────

/// Mirror the reduced-motion preference into the animation duration variable,
/// now and whenever the preference changes.
///
/// # Errors
///
/// [`ShowcaseError::MissingCapability`] without `matchMedia`;
/// [`ShowcaseError::MissingElement`] without `<html>`.
pub fn mount_reduced_motion(window: &Window, document: &Document) -> Result<(), ShowcaseError> {
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ShowcaseError::MissingElement("<html>".to_owned()))?;
    let query = window
        .match_media(REDUCED_MOTION_QUERY)?
        .ok_or(ShowcaseError::MissingCapability("matchMedia"))?;

    if query.matches() {
        set_style(&root, ANIMATION_DURATION_VAR, duration_override(true));
    }

    let watched = query.clone();
    listen(&query, "change", move |_| {
        set_style(&root, ANIMATION_DURATION_VAR, duration_override(watched.matches()));
    })
}

// ── Images ──────────────────────────────────────────────────────

/// Swap in `data-src` for deferred images as they reach the viewport.
/// Returns how many images are waiting.
///
/// # Errors
///
/// [`ShowcaseError::MissingCapability`] without `IntersectionObserver`;
/// [`ShowcaseError::Dom`] when the selector cannot be queried.
pub fn mount_lazy_images(window: &Window, document: &Document, config: &ShowcaseConfig) -> Result<usize, ShowcaseError> {
    let watcher = OneShotWatcher::new(window, None, |el| {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        let data_src = img.get_attribute("data-src");
        if let Some(src) = lazy_source(data_src.as_deref(), &img.src()) {
            log::debug!("loading deferred image {src}");
            img.set_src(src);
        }
        report(img.class_list().remove_1(LAZY_CLASS), "clearing lazy class");
    })?;

    for img in query_all(document, &config.lazy_image_selector)? {
        watcher.observe(&img);
    }
    Ok(watcher.pending())
}

/// Replace every image that fails to load with a neutral placeholder.
///
/// # Errors
///
/// [`ShowcaseError::Dom`] when images cannot be queried or a listener
/// cannot be attached.
pub fn mount_image_fallbacks(document: &Document) -> Result<usize, ShowcaseError> {
    let images = query_all(document, "img")?;
    for el in &images {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            continue;
        };
        if needs_decode_check(img.complete(), img.natural_width(), &img.src()) {
            // Finished before we got here, so no `error` event will follow.
            fallback_if_undecodable(document, img);
            continue;
        }
        let document = document.clone();
        let failed = img.clone();
        listen(img, "error", move |_| replace_with_fallback(&document, &failed))?;
    }
    Ok(images.len())
}

/// Zero natural width is also what a loaded viewBox-only SVG reports, so only
/// a rejected `decode()` counts as a failure.
fn fallback_if_undecodable(document: &Document, img: &HtmlImageElement) {
    let document = document.clone();
    let failed = img.clone();
    let on_reject = Closure::<dyn FnMut(JsValue)>::new(move |_| replace_with_fallback(&document, &failed));
    img.decode().catch(&on_reject);
    on_reject.forget();
}

fn replace_with_fallback(document: &Document, img: &HtmlImageElement) {
    if let Err(err) = build_fallback(document, img).and_then(|placeholder| {
        img.replace_with_with_node_1(&placeholder)?;
        Ok(())
    }) {
        log::warn!("image fallback: {err}");
    }
}

fn build_fallback(document: &Document, img: &HtmlImageElement) -> Result<HtmlElement, ShowcaseError> {
    let placeholder = document.create_element("div")?.unchecked_into::<HtmlElement>();
    placeholder.set_class_name(&fallback_class(&img.class_name()));
    placeholder.set_attribute("role", "img")?;
    placeholder.set_attribute("aria-label", fallback_label(&img.alt()))?;
    for (property, value) in FALLBACK_STYLES {
        set_style(&placeholder, property, value);
    }
    placeholder.set_text_content(Some(FALLBACK_TEXT));
    Ok(placeholder)
}

// ── Page load and anchors ───────────────────────────────────────

/// Mark the body loaded and settle cards one after another once the page
/// has fully loaded.
///
/// # Errors
///
/// [`ShowcaseError::Dom`] when cards cannot be queried or the `load`
/// listener cannot be attached.
pub fn mount_load_settle(window: &Window, document: &Document, config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let cards = query_all_html(document, &config.card_selector)?;
    let timings = config.timings;
    let body = document.body();
    let settle = move || {
        if let Some(body) = &body {
            report(body.class_list().add_1("loaded"), "marking body loaded");
        }
        for (index, card) in cards.iter().enumerate() {
            let card = card.clone();
            after(settle_delay_ms(index, &timings), move || {
                set_style(&card, "opacity", "1");
                set_style(&card, "transform", SETTLED_TRANSFORM);
            });
        }
    };

    if is_document_complete(&document.ready_state()) {
        settle();
        return Ok(());
    }
    let mut settle = Some(settle);
    listen(window, "load", move |_| {
        if let Some(settle) = settle.take() {
            settle();
        }
    })
}

/// Smooth-scroll in-page links to their targets. Returns the number of links.
///
/// # Errors
///
/// [`ShowcaseError::Dom`] when links cannot be queried or a listener cannot
/// be attached.
pub fn mount_anchors(document: &Document, config: &ShowcaseConfig) -> Result<usize, ShowcaseError> {
    let anchors = query_all(document, &config.anchor_selector)?;
    for anchor in &anchors {
        let document = document.clone();
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(anchors.len())
}
