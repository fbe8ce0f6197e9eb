//! Configuration schema types for Concierge.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock
//! client: a local backend on port 8000, a `GUEST` session, and IP
//! based location lookup.

mod backend;
mod display;
mod location;
mod session;
mod system;

pub use backend::*;
pub use display::*;
pub use location::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Concierge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ConciergeConfig {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub location: LocationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_client() {
        let config = ConciergeConfig::default();
        assert_eq!(config.backend.url, "http://127.0.0.1:8000/chat");
        assert_eq!(config.session.user_id, "GUEST");
        assert_eq!(config.location.provider, LocationProviderKind::Ip);
        assert_eq!(config.location.first_submit_wait_ms, 0);
        assert_eq!(config.display.pending_text, "Typing...");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ConciergeConfig = toml::from_str(
            r#"
[session]
user_id = "USR-001"

[location]
provider = "fixed"
latitude = 12.5
longitude = 77.25
"#,
        )
        .unwrap();
        assert_eq!(config.session.user_id, "USR-001");
        assert_eq!(config.session.latitude, 19.10);
        assert_eq!(config.location.provider, LocationProviderKind::Fixed);
        assert_eq!(config.location.latitude, Some(12.5));
        assert_eq!(config.backend.request_timeout, 60);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let result: Result<ConciergeConfig, _> = toml::from_str(
            r#"
[location]
provider = "gps"
"#,
        );
        assert!(result.is_err());
    }
}
