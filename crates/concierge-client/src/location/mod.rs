//! One-shot location acquisition.
//!
//! A `LocationProvider` is asked for coordinates once at startup on a
//! spawned task. The outcome is published as a `LocationStatus` over a
//! watch channel; nothing else touches the session until the adapter
//! applies it.

mod ip;
mod watch;

pub use ip::IpLocator;
pub use watch::{spawn_location, LocationWatch};

use async_trait::async_trait;
use concierge_common::Coordinates;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("location access denied: {0}")]
    Denied(String),
    #[error("geolocation not supported")]
    Unsupported,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Status indicator shown next to the chat.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    Locating,
    Located(Coordinates),
    /// Lookup refused or failed; defaults stay in place.
    Denied(String),
    Unsupported,
}

impl LocationStatus {
    pub fn from_result(result: &Result<Coordinates, LocationError>) -> Self {
        match result {
            Ok(coords) => LocationStatus::Located(*coords),
            Err(LocationError::Unsupported) => LocationStatus::Unsupported,
            Err(LocationError::Denied(reason)) | Err(LocationError::Unavailable(reason)) => {
                LocationStatus::Denied(reason.clone())
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, LocationStatus::Locating)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationStatus::Locating => "Locating...",
            LocationStatus::Located(_) => "Location acquired",
            LocationStatus::Denied(_) => "Location access denied",
            LocationStatus::Unsupported => "Geolocation not supported",
        }
    }
}

/// Always reports the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Stands in when location lookup is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}
