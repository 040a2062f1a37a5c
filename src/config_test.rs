#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn missing_attribute_yields_defaults() {
    let cfg = FxConfig::from_json(None).unwrap();
    assert_eq!(cfg, FxConfig::default());
    assert_eq!(cfg.elevation_offset, DEFAULT_ELEVATION_OFFSET);
    assert_eq!(cfg.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    assert_eq!(cfg.recipient_label, "Azka");
    assert_eq!(cfg.subject_prefix, "Portfolio enquiry");
}

#[test]
fn blank_attribute_yields_defaults() {
    assert_eq!(FxConfig::from_json(Some("   ")).unwrap(), FxConfig::default());
}

#[test]
fn partial_object_keeps_other_defaults() {
    let cfg = FxConfig::from_json(Some(r#"{"recipientLabel": "Sam"}"#)).unwrap();
    assert_eq!(cfg.recipient_label, "Sam");
    assert_eq!(cfg.subject_prefix, DEFAULT_SUBJECT_PREFIX);
    assert_eq!(cfg.elevation_offset, DEFAULT_ELEVATION_OFFSET);
}

#[test]
fn full_object_overrides_everything() {
    let cfg = FxConfig::from_json(Some(
        r#"{"elevationOffset": 40, "revealThreshold": 0.5, "recipientLabel": "Jo", "subjectPrefix": "Hello"}"#,
    ))
    .unwrap();
    assert_eq!(cfg.elevation_offset, 40.0);
    assert_eq!(cfg.reveal_threshold, 0.5);
    assert_eq!(cfg.recipient_label, "Jo");
    assert_eq!(cfg.subject_prefix, "Hello");
}

#[test]
fn reveal_threshold_is_clamped_to_unit_range() {
    let high = FxConfig::from_json(Some(r#"{"revealThreshold": 3.0}"#)).unwrap();
    assert_eq!(high.reveal_threshold, 1.0);
    let low = FxConfig::from_json(Some(r#"{"revealThreshold": -0.4}"#)).unwrap();
    assert_eq!(low.reveal_threshold, 0.0);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = FxConfig::from_json(Some("{not json")).unwrap_err();
    assert!(matches!(err, FxError::Config(_)));
    assert!(err.to_string().starts_with("invalid config:"));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = FxConfig::from_json(Some(r#"{"elevationOffset": "high"}"#)).unwrap_err();
    assert!(matches!(err, FxError::Config(_)));
}
