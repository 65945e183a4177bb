use super::*;

#[test]
fn defaults_match_card_timing() {
    let cfg = CardConfig::default();
    assert_eq!(cfg.frames_count, 6);
    assert_eq!(cfg.cooldown_ms, 495);
    assert_eq!(cfg.grace(), Duration::from_secs(1));
    cfg.validate().unwrap();
}

#[test]
fn query_sets_frames_count() {
    let mut cfg = CardConfig::default();
    cfg.apply_query("?foo=1&frames-count=12&bar=2").unwrap();
    assert_eq!(cfg.frames_count, 12);

    cfg.apply_query("?frames-count=0").unwrap();
    assert_eq!(cfg.frames_count, 0);
}

#[test]
fn query_without_digits_keeps_current_value() {
    let mut cfg = CardConfig::default();
    cfg.apply_query("?frames-count=-3").unwrap();
    assert_eq!(cfg.frames_count, 6);
    cfg.apply_query("").unwrap();
    assert_eq!(cfg.frames_count, 6);
}

#[test]
fn query_skips_empty_match_and_takes_next() {
    let mut cfg = CardConfig::default();
    cfg.apply_query("?frames-count=&frames-count=4").unwrap();
    assert_eq!(cfg.frames_count, 4);
}

#[test]
fn query_rejects_overflowing_count() {
    let mut cfg = CardConfig::default();
    let err = cfg
        .apply_query("?frames-count=99999999999999999999999999")
        .unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg: CardConfig = serde_json::from_str(r#"{"frames_count": 9}"#).unwrap();
    assert_eq!(cfg.frames_count, 9);
    assert_eq!(cfg.grace_ms, DEFAULT_GRACE_MS);
    assert!(serde_json::from_str::<CardConfig>(r#"{"frame_count": 9}"#).is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let cfg = CardConfig {
        jpeg_quality: 0,
        ..CardConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = CardConfig {
        cooldown_ms: 0,
        ..CardConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_caps_frames_count() {
    let mut cfg = CardConfig::default();
    cfg.apply_query(&format!("?frames-count={}", usize::MAX)).unwrap();
    assert_eq!(cfg.frames_count, usize::MAX);
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, LenticardError::Validation(_)));
    assert!(err.to_string().contains("frames_count"));

    cfg.frames_count = MAX_FRAMES_COUNT;
    cfg.validate().unwrap();
    cfg.frames_count = MAX_FRAMES_COUNT + 1;
    assert!(cfg.validate().is_err());
}
