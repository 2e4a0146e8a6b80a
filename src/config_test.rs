use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_base_url_is_set() {
    let config = Config::from_lookup(lookup_from(&[("API_BASE_URL", "http://localhost:4000/")])).unwrap();

    assert_eq!(config.api_base_url, "http://localhost:4000");
    assert_eq!(config.utc_offset.local_minus_utc(), 5 * 3600 + 30 * 60);
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.record_fetch, RecordFetchPolicy::Lenient);
    assert_eq!(config.log_dir, "logs");
}

#[test]
fn missing_base_url_is_reported() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("API_BASE_URL"));
    assert_eq!(err.to_string(), "API_BASE_URL must be set");
}

#[test]
fn zone_names_are_not_accepted_as_offsets() {
    let err = Config::from_lookup(lookup_from(&[
        ("API_BASE_URL", "http://x"),
        ("INSTITUTION_UTC_OFFSET", "Asia/Kolkata"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("INSTITUTION_UTC_OFFSET", _)));
}

#[test]
fn strict_record_fetch_and_custom_values() {
    let config = Config::from_lookup(lookup_from(&[
        ("API_BASE_URL", "http://x"),
        ("INSTITUTION_UTC_OFFSET", "-03:00"),
        ("REQUEST_TIMEOUT_SECS", "3"),
        ("RECORD_FETCH_STRICT", "TRUE"),
        ("LOG_DIR", "/tmp/att"),
    ]))
    .unwrap();

    assert_eq!(config.utc_offset.local_minus_utc(), -3 * 3600);
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.record_fetch, RecordFetchPolicy::Strict);
    assert_eq!(config.log_dir, "/tmp/att");
}

#[test]
fn bad_timeout_is_invalid() {
    let err = Config::from_lookup(lookup_from(&[
        ("API_BASE_URL", "http://x"),
        ("REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Invalid("REQUEST_TIMEOUT_SECS", "soon".to_string()));
}
