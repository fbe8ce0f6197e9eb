//! Client-held session state attached to every chat request.

use concierge_common::Coordinates;
use tracing::debug;

use crate::location::LocationStatus;
use crate::ChatRequest;

pub const DEFAULT_USER_ID: &str = "GUEST";
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 19.10,
    longitude: 72.78,
};

/// Identity and position sent with each query. Lives for the process
/// lifetime and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user_id: String,
    coordinates: Coordinates,
}

impl Session {
    pub fn new(user_id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            user_id: user_id.into(),
            coordinates,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Apply a location outcome. Only a successful fix changes the
    /// session; the latest fix wins.
    pub fn apply_location(&mut self, status: &LocationStatus) -> bool {
        match status {
            LocationStatus::Located(coords) => {
                self.coordinates = *coords;
                true
            }
            _ => false,
        }
    }

    /// Adopt an identifier returned by the backend if it differs from the
    /// current one. Returns `true` when the id changed.
    pub fn adopt_user_id(&mut self, returned: Option<&str>) -> bool {
        match returned {
            Some(id) if id != self.user_id => {
                debug!(from = %self.user_id, to = %id, "backend reassigned user id");
                self.user_id = id.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn request_for(&self, query: impl Into<String>) -> ChatRequest {
        ChatRequest {
            user_id: self.user_id.clone(),
            query: query.into(),
            latitude: self.coordinates.latitude,
            longitude: self.coordinates.longitude,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID, DEFAULT_COORDINATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_guest_with_placeholder_coordinates() {
        let session = Session::default();
        assert_eq!(session.user_id(), "GUEST");
        assert_eq!(session.coordinates(), Coordinates::new(19.10, 72.78));
    }

    #[test]
    fn latest_location_fix_wins() {
        let mut session = Session::default();
        let first = Coordinates::new(10.0, 20.0);
        let second = Coordinates::new(30.0, 40.0);
        assert!(session.apply_location(&LocationStatus::Located(first)));
        assert!(session.apply_location(&LocationStatus::Located(second)));
        assert_eq!(session.coordinates(), second);
    }

    #[test]
    fn failed_location_keeps_defaults() {
        let mut session = Session::default();
        assert!(!session.apply_location(&LocationStatus::Denied("blocked".into())));
        assert!(!session.apply_location(&LocationStatus::Unsupported));
        assert!(!session.apply_location(&LocationStatus::Locating));
        assert_eq!(session.coordinates(), DEFAULT_COORDINATES);
    }

    #[test]
    fn adopts_new_user_id() {
        let mut session = Session::default();
        assert!(session.adopt_user_id(Some("USR-42")));
        assert_eq!(session.user_id(), "USR-42");
    }

    #[test]
    fn same_or_missing_user_id_is_ignored() {
        let mut session = Session::new("USR-42", DEFAULT_COORDINATES);
        assert!(!session.adopt_user_id(Some("USR-42")));
        assert!(!session.adopt_user_id(None));
        assert_eq!(session.user_id(), "USR-42");
    }

    #[test]
    fn request_carries_session_context() {
        let session = Session::new("USR-7", Coordinates::new(1.5, 2.5));
        let request = session.request_for("hello");
        assert_eq!(request.user_id, "USR-7");
        assert_eq!(request.query, "hello");
        assert_eq!(request.latitude, 1.5);
        assert_eq!(request.longitude, 2.5);
    }
}
