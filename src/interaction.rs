//! Per-card affordances: staggered entrance, hover lift, ripple, product
//! notification, keyboard activation, reduced motion, and image handling.
//!
//! Everything here is plain data and arithmetic; `dom::interaction` applies
//! it to the page.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::config::Timings;

// ── Cards ───────────────────────────────────────────────────────

/// Transform applied while the pointer is over a card.
pub const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";

/// Transform applied to each card once the page has loaded.
pub const SETTLED_TRANSFORM: &str = "translateY(0)";

/// Format milliseconds as a CSS time in seconds without float noise.
pub fn css_seconds(ms: u64) -> String {
    let whole = ms / 1000;
    let frac = ms % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}s", frac.trim_end_matches('0'))
}

/// Animation delay for the card at `index` (0.1s per step by default).
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    css_seconds(index.saturating_mul(u64::from(step_ms)))
}

/// Delay after `load` before the card at `index` settles into place.
pub fn settle_delay_ms(index: usize, timings: &Timings) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    timings
        .load_settle_ms
        .saturating_add(index.saturating_mul(timings.stagger_step_ms))
}

/// `document.readyState` has moved past `loading`, so the markup is parsed.
pub fn is_document_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// `document.readyState` is `complete`, so `load` has already fired.
pub fn is_document_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Enter on a focused card activates its primary action.
pub fn is_card_activation_key(key: &str) -> bool {
    key == "Enter"
}

// ── Ripple ──────────────────────────────────────────────────────

/// Client-space bounding box of the activated control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple covering the control, positioned relative to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Ripple centered on a pointer position.
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Ripple centered on the control, for keyboard-delegated clicks that
    /// carry no pointer position.
    pub fn centered(rect: Rect) -> Self {
        Self::from_click(rect, rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
    }

    pub fn css_text(&self, duration_ms: u32) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple {duration} ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = css_seconds(u64::from(duration_ms)),
        )
    }
}

// ── Notification ────────────────────────────────────────────────

pub const NOTIFICATION_HEADLINE: &str = "Product Details";
pub const NOTIFICATION_HINT: &str = "Click to dismiss";
pub const NOTIFICATION_HIDDEN_TRANSFORM: &str = "translateX(100%)";
pub const NOTIFICATION_SHOWN_TRANSFORM: &str = "translateX(0)";

/// Fixed styling of the notification popup; the slide transform is set
/// separately as it changes over the lifecycle.
pub fn notification_css(exit_ms: u32) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: var(--accent-primary); color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3); \
         z-index: 1000; cursor: pointer; transform: {NOTIFICATION_HIDDEN_TRANSFORM}; \
         transition: transform {} ease;",
        css_seconds(u64::from(exit_ms))
    )
}

/// Text pulled from a product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSummary {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductSummary {
    pub fn new(title: &str, description: &str, price: &str) -> Self {
        Self {
            title: title.trim().to_owned(),
            description: description.trim().to_owned(),
            price: price.trim().to_owned(),
        }
    }

    /// `Title - $price`, the line identifying the product.
    pub fn detail_line(&self) -> String {
        format!("{} - {}", self.title, self.price)
    }
}

/// Lifecycle of one notification popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Attached off-screen, waiting for the slide-in.
    #[default]
    Entering,
    Shown,
    /// Sliding out; detached when the exit transition ends.
    Leaving,
    Removed,
}

/// Per-popup state. Each popup is timed independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct Notification {
    phase: NotificationPhase,
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(self) -> NotificationPhase {
        self.phase
    }

    /// Slide in. Returns `false` if the popup was dismissed first.
    pub fn show(&mut self) -> bool {
        if self.phase != NotificationPhase::Entering {
            return false;
        }
        self.phase = NotificationPhase::Shown;
        true
    }

    /// Start the exit. Only the first call (click or timer) returns `true`.
    pub fn dismiss(&mut self) -> bool {
        match self.phase {
            NotificationPhase::Entering | NotificationPhase::Shown => {
                self.phase = NotificationPhase::Leaving;
                true
            }
            NotificationPhase::Leaving | NotificationPhase::Removed => false,
        }
    }

    /// Exit transition finished. Returns `true` when the element should be
    /// detached now.
    pub fn finish(&mut self) -> bool {
        if self.phase != NotificationPhase::Leaving {
            return false;
        }
        self.phase = NotificationPhase::Removed;
        true
    }
}

/// Element tag and text for each line of the popup, top to bottom. The
/// description line is left out when the card has none.
pub fn notification_lines(summary: &ProductSummary) -> Vec<(&'static str, String)> {
    let mut lines = vec![("strong", NOTIFICATION_HEADLINE.to_owned()), ("div", summary.detail_line())];
    if !summary.description.is_empty() {
        lines.push(("div", summary.description.clone()));
    }
    lines.push(("small", NOTIFICATION_HINT.to_owned()));
    lines
}

/// Upper bound on how long an unclicked popup stays in the document.
pub fn notification_max_lifetime_ms(timings: &Timings) -> u32 {
    timings
        .notification_lifetime_ms
        .saturating_add(timings.notification_exit_ms)
}

// ── Reduced motion ──────────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const ANIMATION_DURATION_VAR: &str = "--animation-duration";

/// Value for [`ANIMATION_DURATION_VAR`]; empty restores the stylesheet value.
pub fn duration_override(reduced: bool) -> &'static str {
    if reduced { "0.01ms" } else { "" }
}

// ── Images ──────────────────────────────────────────────────────

pub const LAZY_CLASS: &str = "lazy";
pub const FALLBACK_CLASS: &str = "image-fallback";
pub const FALLBACK_TEXT: &str = "Image not available";
pub const FALLBACK_STYLES: &[(&str, &str)] = &[
    ("background", "linear-gradient(45deg, #f0f0f0, #e0e0e0)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("color", "#666"),
];

/// Accessible label for a placeholder: the image's alt text when it has one.
pub fn fallback_label(alt: &str) -> &str {
    let alt = alt.trim();
    if alt.is_empty() { FALLBACK_TEXT } else { alt }
}

/// Class list for a placeholder: the image's own classes plus
/// [`FALLBACK_CLASS`].
pub fn fallback_class(classes: &str) -> String {
    classes
        .split_whitespace()
        .filter(|class| *class != FALLBACK_CLASS)
        .chain(std::iter::once(FALLBACK_CLASS))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An image that finished before we could listen for `error` and reports no
/// pixels. It may have failed, or be an SVG with only a `viewBox`; callers
/// confirm with `decode()` before replacing it.
pub fn needs_decode_check(complete: bool, natural_width: u32, src: &str) -> bool {
    complete && natural_width == 0 && !src.is_empty()
}

/// Source to load when a deferred image enters the viewport, or `None` to
/// keep the current one.
pub fn lazy_source<'a>(data_src: Option<&'a str>, current: &str) -> Option<&'a str> {
    let src = data_src.map(str::trim).filter(|s| !s.is_empty())?;
    (src != current).then_some(src)
}

// ── Anchors ─────────────────────────────────────────────────────

/// Element id targeted by an in-page link, e.g. `#products` → `products`.
/// A bare `#` targets nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
