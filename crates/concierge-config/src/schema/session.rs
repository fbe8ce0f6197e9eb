use serde::{Deserialize, Serialize};

/// Initial session values used until the backend or a location fix
/// replaces them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: "GUEST".into(),
            latitude: 19.10,
            longitude: 72.78,
        }
    }
}
