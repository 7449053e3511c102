use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.trigger_id, "theme-toggle");
}

#[test]
fn partial_json_fills_missing_fields_with_defaults() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"site-theme"}"#).expect("config");
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.trigger_id, DEFAULT_TRIGGER_ID);
}

#[test]
fn empty_object_is_default() {
    let config = ThemeConfig::from_json("{}").expect("config");
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = ThemeConfig::from_json("{storage_key:").expect_err("should fail");
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"storage_key":""}"#).expect_err("should fail");
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn empty_trigger_id_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"trigger_id":""}"#).expect_err("should fail");
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn absent_or_blank_attribute_means_defaults() {
    assert_eq!(ThemeConfig::from_attribute(None).expect("config"), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_attribute(Some("  ")).expect("config"), ThemeConfig::default());
}

#[test]
fn attribute_value_is_parsed_as_json() {
    let config = ThemeConfig::from_attribute(Some(r#" {"trigger_id":"mode-switch"} "#)).expect("config");
    assert_eq!(config.trigger_id, "mode-switch");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}
