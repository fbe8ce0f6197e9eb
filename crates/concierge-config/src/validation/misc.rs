//! Per-section validation: backend, session, location, and display.

use crate::schema::{ConciergeConfig, LocationProviderKind};

use super::helpers::{validate_http_url, validate_range, validate_range_f64};

/// Validate backend constraints.
pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &ConciergeConfig) {
    validate_http_url(errors, "backend.url", &config.backend.url);
    validate_range(
        errors,
        "backend.connect_timeout",
        config.backend.connect_timeout,
        1,
        60,
    );
    validate_range(
        errors,
        "backend.request_timeout",
        config.backend.request_timeout,
        1,
        600,
    );
}

/// Validate session defaults.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &ConciergeConfig) {
    if config.session.user_id.trim().is_empty() {
        errors.push("session.user_id must not be empty".into());
    }
    validate_range_f64(
        errors,
        "session.latitude",
        config.session.latitude,
        -90.0,
        90.0,
    );
    validate_range_f64(
        errors,
        "session.longitude",
        config.session.longitude,
        -180.0,
        180.0,
    );
}

/// Validate location constraints.
pub(crate) fn validate_location(errors: &mut Vec<String>, config: &ConciergeConfig) {
    let location = &config.location;
    validate_range(errors, "location.timeout", location.timeout, 1, 60);
    validate_range(
        errors,
        "location.first_submit_wait_ms",
        location.first_submit_wait_ms,
        0,
        10_000,
    );

    match location.provider {
        LocationProviderKind::Ip => {
            validate_http_url(errors, "location.lookup_url", &location.lookup_url);
        }
        LocationProviderKind::Fixed => match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => {
                validate_range_f64(errors, "location.latitude", lat, -90.0, 90.0);
                validate_range_f64(errors, "location.longitude", lon, -180.0, 180.0);
            }
            _ => errors.push(
                "location.provider = \"fixed\" requires location.latitude and location.longitude"
                    .into(),
            ),
        },
        LocationProviderKind::Disabled => {}
    }
}

/// Validate display constraints.
pub(crate) fn validate_display(errors: &mut Vec<String>, config: &ConciergeConfig) {
    if config.display.pending_text.trim().is_empty() {
        errors.push("display.pending_text must not be empty".into());
    }
}
