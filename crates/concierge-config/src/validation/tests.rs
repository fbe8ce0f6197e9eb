//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ConciergeConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_backend_url() {
    let mut config = ConciergeConfig::default();
    config.backend.url = "ftp://example.com/chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.url"));
}

#[test]
fn catches_backend_url_without_host() {
    let mut config = ConciergeConfig::default();
    config.backend.url = "http:///chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.url"));
}

#[test]
fn catches_zero_request_timeout() {
    let mut config = ConciergeConfig::default();
    config.backend.request_timeout = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.request_timeout"));
}

#[test]
fn catches_blank_user_id() {
    let mut config = ConciergeConfig::default();
    config.session.user_id = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.user_id"));
}

#[test]
fn catches_latitude_out_of_range() {
    let mut config = ConciergeConfig::default();
    config.session.latitude = 95.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.latitude"));
}

#[test]
fn catches_nan_longitude() {
    let mut config = ConciergeConfig::default();
    config.session.longitude = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.longitude"));
}

#[test]
fn fixed_provider_requires_coordinates() {
    let mut config = ConciergeConfig::default();
    config.location.provider = LocationProviderKind::Fixed;
    config.location.latitude = Some(10.0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("requires location.latitude and location.longitude"));

    config.location.longitude = Some(20.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn disabled_provider_ignores_lookup_url() {
    let mut config = ConciergeConfig::default();
    config.location.provider = LocationProviderKind::Disabled;
    config.location.lookup_url = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_wait_too_long() {
    let mut config = ConciergeConfig::default();
    config.location.first_submit_wait_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("location.first_submit_wait_ms"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ConciergeConfig::default();
    config.backend.connect_timeout = 0;
    config.display.pending_text = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.connect_timeout"));
    assert!(err.contains("display.pending_text"));
    assert!(err.contains("; "));
}
