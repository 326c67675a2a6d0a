use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = ShowcaseConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.toggle_id, "themeToggle");
    assert_eq!(config.card_selector, ".product-card");
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.parallax_speed, 0.5);
    assert_eq!(config.timings.notification_lifetime_ms, 3000);
    assert_eq!(config.timings.notification_exit_ms, 300);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = ShowcaseConfig::from_json(r#"{ "storageKey": "shop-theme", "timings": { "rippleMs": 400 } }"#)
        .expect("config should parse");
    assert_eq!(config.storage_key, "shop-theme");
    assert_eq!(config.timings.ripple_ms, 400);
    assert_eq!(config.timings.press_feedback_ms, 150);
    assert_eq!(config.hero_selector, ".hero");
}

#[test]
fn empty_object_is_default() {
    let config = ShowcaseConfig::from_json("{}").expect("config should parse");
    assert_eq!(config, ShowcaseConfig::default());
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = ShowcaseConfig::from_json(r#"{ "revealThreshold": 1.5 }"#).expect_err("should reject");
    assert!(matches!(err, ShowcaseError::Config(_)));
    assert!(err.to_string().contains("revealThreshold"));
}

#[test]
fn blank_selector_is_rejected() {
    let err = ShowcaseConfig::from_json(r#"{ "cardSelector": "  " }"#).expect_err("should reject");
    assert!(err.to_string().contains("cardSelector"));
}

#[test]
fn malformed_json_is_config_error() {
    let err = ShowcaseConfig::from_json("{ not json").expect_err("should reject");
    assert!(matches!(err, ShowcaseError::Config(_)));
}

#[test]
fn load_or_default_falls_back_on_bad_input() {
    assert_eq!(ShowcaseConfig::load_or_default(None), ShowcaseConfig::default());
    assert_eq!(ShowcaseConfig::load_or_default(Some("[]")), ShowcaseConfig::default());
    let tuned = ShowcaseConfig::load_or_default(Some(r#"{ "parallaxSpeed": 0.25 }"#));
    assert_eq!(tuned.parallax_speed, 0.25);
}
