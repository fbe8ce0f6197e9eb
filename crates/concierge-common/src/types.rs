use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and within the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Agent,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::User => write!(f, "user"),
            Origin::Agent => write!(f, "agent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_validity() {
        assert!(Coordinates::new(19.10, 72.78).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn coordinates_display() {
        let c = Coordinates::new(19.1, 72.78);
        assert_eq!(c.to_string(), "19.1000, 72.7800");
    }

    #[test]
    fn coordinates_serialization() {
        let c = Coordinates::new(1.5, -2.25);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.25}"#);
    }

    #[test]
    fn origin_serialization() {
        assert_eq!(serde_json::to_string(&Origin::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Origin::Agent).unwrap(), "\"agent\"");
        assert_eq!(Origin::Agent.to_string(), "agent");
    }
}
