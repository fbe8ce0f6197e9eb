//! IP-based location lookup.

use std::time::Duration;

use async_trait::async_trait;
use concierge_common::Coordinates;
use tracing::debug;

use super::{LocationError, LocationProvider};

/// Resolves approximate coordinates from the caller's public IP using a
/// JSON lookup service that answers with `latitude` and `longitude`.
pub struct IpLocator {
    url: String,
    http: reqwest::Client,
}

impl IpLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LocationError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LocationError::Unavailable(format!("HTTP client error: {e}")))?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub(crate) fn parse_body(body: &str) -> Result<Coordinates, LocationError> {
        let data: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| LocationError::Unavailable(format!("invalid lookup JSON: {e}")))?;

        // ipapi.co reports quota and lookup failures in-band.
        if data["error"].as_bool() == Some(true) {
            let reason = data["reason"].as_str().unwrap_or("lookup refused");
            return Err(LocationError::Denied(reason.to_string()));
        }

        let lat = data["latitude"]
            .as_f64()
            .ok_or_else(|| LocationError::Unavailable("lookup missing latitude".into()))?;
        let lon = data["longitude"]
            .as_f64()
            .ok_or_else(|| LocationError::Unavailable("lookup missing longitude".into()))?;

        let coords = Coordinates::new(lat, lon);
        if !coords.is_valid() {
            return Err(LocationError::Unavailable(format!(
                "lookup returned out-of-range coordinates ({coords})"
            )));
        }
        Ok(coords)
    }
}

#[async_trait]
impl LocationProvider for IpLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        debug!(url = %self.url, "IP location lookup");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(format!("lookup failed: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(LocationError::Denied(format!("lookup returned {status}")));
        }
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!(
                "lookup returned {status}"
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LocationError::Unavailable(format!("failed to read lookup: {e}")))?;
        Self::parse_body(&body)
    }
}
