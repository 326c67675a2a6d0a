use super::*;

#[derive(Default)]
struct RecordingSurface {
    attribute: Option<ThemePreference>,
    label: Option<String>,
    applied: usize,
}

impl ThemeSurface for RecordingSurface {
    fn apply_theme(&mut self, theme: ThemePreference) {
        self.attribute = Some(theme);
        self.applied += 1;
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.label = Some(label.to_owned());
    }
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, ShowcaseError> {
        Err(ShowcaseError::Storage("denied".to_owned()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), ShowcaseError> {
        Err(ShowcaseError::Storage("quota".to_owned()))
    }
}

fn controller(store: MemoryStore) -> ThemeController<MemoryStore, RecordingSurface> {
    ThemeController::new(store, RecordingSurface::default(), "theme")
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("Dark"), None);
    assert_eq!(ThemePreference::parse(""), None);
}

#[test]
fn toggled_is_complement() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
}

#[test]
fn label_names_the_opposite_state() {
    assert_eq!(ThemePreference::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light mode");
}

#[test]
fn toggle_keys_are_enter_and_space() {
    assert!(is_toggle_key("Enter"));
    assert!(is_toggle_key(" "));
    assert!(!is_toggle_key("Tab"));
    assert!(!is_toggle_key("Spacebar"));
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn initialize_defaults_to_light_when_nothing_stored() {
    let mut ctl = controller(MemoryStore::new());
    assert_eq!(ctl.initialize(), ThemePreference::Light);
    assert_eq!(ctl.surface().attribute, Some(ThemePreference::Light));
    assert_eq!(ctl.store().get("theme"), Some("light"));
}

#[test]
fn initialize_applies_stored_dark_and_labels_switch_to_light() {
    let mut ctl = controller(MemoryStore::with_entry("theme", "dark"));
    assert_eq!(ctl.initialize(), ThemePreference::Dark);
    assert_eq!(ctl.current(), ThemePreference::Dark);
    assert_eq!(ctl.surface().attribute, Some(ThemePreference::Dark));
    assert_eq!(ctl.surface().label.as_deref(), Some("Switch to light mode"));
}

#[test]
fn initialize_treats_garbage_as_absent() {
    let mut ctl = controller(MemoryStore::with_entry("theme", "sepia"));
    assert_eq!(ctl.initialize(), ThemePreference::Light);
    assert_eq!(ctl.store().get("theme"), Some("light"));
}

#[test]
fn toggle_twice_round_trips_attribute_and_store() {
    for initial in ["light", "dark"] {
        let mut ctl = controller(MemoryStore::with_entry("theme", initial));
        let start = ctl.initialize();
        assert_ne!(ctl.toggle_theme(), start);
        assert_eq!(ctl.toggle_theme(), start);
        assert_eq!(ctl.surface().attribute, Some(start));
        assert_eq!(ctl.store().get("theme"), Some(initial));
    }
}

#[test]
fn attribute_and_cache_agree_after_every_mutation() {
    let mut ctl = controller(MemoryStore::new());
    ctl.initialize();
    for _ in 0..5 {
        ctl.toggle_theme();
        assert_eq!(ctl.surface().attribute, Some(ctl.current()));
        assert_eq!(ctl.store().get("theme"), Some(ctl.current().as_str()));
        assert_eq!(ctl.surface().label.as_deref(), Some(ctl.current().toggle_label()));
    }
}

#[test]
fn storage_failure_keeps_session_theme() {
    let mut ctl = ThemeController::new(FailingStore, RecordingSurface::default(), "theme");
    assert_eq!(ctl.initialize(), ThemePreference::Light);
    assert_eq!(ctl.toggle_theme(), ThemePreference::Dark);
    assert_eq!(ctl.current(), ThemePreference::Dark);
    assert_eq!(ctl.surface().attribute, Some(ThemePreference::Dark));
    assert_eq!(ctl.surface().applied, 2);
}
