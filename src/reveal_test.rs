use super::*;

// =============================================================
// WatchSet
// =============================================================

#[test]
fn first_intersection_reveals_and_unwatches() {
    let mut set = WatchSet::new();
    set.observe_all(["card-1", "card-2", "hero"]);
    assert_eq!(set.handle(&"card-2", true), Some("card-2"));
    assert!(!set.is_watched(&"card-2"));
    assert_eq!(set.len(), 2);
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut set = WatchSet::new();
    set.observe("card-1");
    assert_eq!(set.handle(&"card-1", false), None);
    assert!(set.is_watched(&"card-1"));
}

#[test]
fn scroll_in_out_in_triggers_once() {
    let mut set = WatchSet::new();
    set.observe("card-1");
    let mut revealed = false;
    for intersecting in [true, false, true, false, true] {
        if set.handle(&"card-1", intersecting).is_some() {
            assert!(!revealed, "reveal must fire only once");
            revealed = true;
        }
    }
    assert!(revealed);
    assert!(set.is_empty());
}

#[test]
fn unknown_keys_yield_nothing() {
    let mut set = WatchSet::new();
    set.observe("card-1");
    assert_eq!(set.handle(&"footer", true), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn observe_is_idempotent() {
    let mut set = WatchSet::new();
    assert!(set.observe("hero"));
    assert!(!set.observe("hero"));
    assert_eq!(set.len(), 1);
}

#[test]
fn options_come_from_config() {
    let opts = ObserverOptions::from_config(&ShowcaseConfig::default());
    assert_eq!(opts.threshold, 0.1);
    assert_eq!(opts.root_margin, "0px 0px -50px 0px");
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_at_200px_is_minus_100() {
    let offset = parallax_offset(200.0, 0.5);
    assert_eq!(offset, -100.0);
    assert_eq!(translate_y(offset), "translateY(-100px)");
}

#[test]
fn parallax_is_unclamped() {
    assert_eq!(parallax_offset(10_000.0, 0.5), -5000.0);
    assert_eq!(translate_y(parallax_offset(0.0, 0.5)), "translateY(0px)");
}

#[test]
fn fractional_offsets_keep_precision() {
    assert_eq!(translate_y(parallax_offset(3.0, 0.5)), "translateY(-1.5px)");
}

// =============================================================
// FrameGate
// =============================================================

#[test]
fn gate_coalesces_until_frame_completes() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}
