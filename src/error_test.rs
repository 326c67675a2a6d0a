use super::*;

#[test]
fn messages_name_the_failure() {
    assert_eq!(
        ShowcaseError::MissingCapability("IntersectionObserver").to_string(),
        "browser capability unavailable: IntersectionObserver"
    );
    assert_eq!(
        ShowcaseError::MissingElement("#themeToggle".to_owned()).to_string(),
        "expected element not found: #themeToggle"
    );
    assert_eq!(ShowcaseError::Storage("quota".to_owned()).to_string(), "preference storage failed: quota");
}

#[test]
fn json_errors_become_config_errors() {
    let err = serde_json::from_str::<serde_json::Value>("{").expect_err("should fail");
    let err = ShowcaseError::from(err);
    assert!(matches!(err, ShowcaseError::Config(_)));
    assert!(err.to_string().starts_with("invalid config: "));
}
