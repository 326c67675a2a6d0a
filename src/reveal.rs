//! Scroll-driven reveal and hero parallax.
//!
//! DESIGN
//! ======
//! Visibility watching is one-shot: an element leaves the [`WatchSet`] on its
//! first qualifying intersection, so a revealed element never reverts and is
//! never re-triggered. Parallax work is coalesced through a [`FrameGate`] so a
//! burst of scroll events produces at most one style write per frame.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::ShowcaseConfig;

/// Class added to an element once it has scrolled into view.
pub const REVEALED_CLASS: &str = "animate-in";

/// Visibility watcher tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self { threshold: config.reveal_threshold, root_margin: config.reveal_root_margin.clone() }
    }
}

/// Elements still waiting for their first intersection.
#[derive(Clone, Debug)]
pub struct WatchSet<K> {
    pending: Vec<K>,
}

impl<K> Default for WatchSet<K> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<K: PartialEq> WatchSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns `false` if it was already watched.
    pub fn observe(&mut self, key: K) -> bool {
        if self.pending.contains(&key) {
            return false;
        }
        self.pending.push(key);
        true
    }

    pub fn observe_all(&mut self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.observe(key);
        }
    }

    pub fn is_watched(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one visibility entry. On the first intersecting entry for a
    /// watched key, the key is removed and returned so the caller can reveal
    /// it and stop observing. Everything else yields `None`.
    pub fn handle(&mut self, key: &K, intersecting: bool) -> Option<K> {
        if !intersecting {
            return None;
        }
        let idx = self.pending.iter().position(|k| k == key)?;
        Some(self.pending.swap_remove(idx))
    }
}

/// Vertical hero offset for the current scroll position.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// CSS transform for a vertical offset in pixels.
pub fn translate_y(offset_px: f64) -> String {
    // Avoid rendering `-0px` at the top of the page.
    let offset_px = if offset_px == 0.0 { 0.0 } else { offset_px };
    format!("translateY({offset_px}px)")
}

/// At-most-one-per-frame guard for scroll work.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame; `false` when
    /// one is already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear the pending flag once the frame callback has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(self) -> bool {
        self.pending
    }
}
