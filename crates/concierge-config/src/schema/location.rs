//! Location acquisition settings.

use serde::{Deserialize, Serialize};

/// Which location source runs at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LocationProviderKind {
    /// Look up approximate coordinates from the public IP address.
    #[default]
    Ip,
    /// Use `latitude`/`longitude` from this section.
    Fixed,
    /// Never acquire a location; session defaults are sent.
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub provider: LocationProviderKind,
    /// Endpoint for IP lookups. Must return JSON with `latitude` and `longitude`.
    pub lookup_url: String,
    /// Lookup timeout in seconds (valid range: 1-60).
    pub timeout: u32,
    /// How long the first submission waits for an unsettled lookup, in
    /// milliseconds. Zero never waits (valid range: 0-10000).
    pub first_submit_wait_ms: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: LocationProviderKind::Ip,
            lookup_url: "https://ipapi.co/json/".into(),
            timeout: 10,
            first_submit_wait_ms: 0,
            latitude: None,
            longitude: None,
        }
    }
}
