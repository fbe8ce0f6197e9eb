//! Concierge configuration system.
//!
//! Provides TOML-based configuration with validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use concierge_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ConciergeConfig, CONFIG_SCHEMA_VERSION};

use concierge_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists, then validates the
/// result.
pub fn load_config() -> Result<ConciergeConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path. A missing file is an
/// error here; only the default location is created on demand.
pub fn load_config_from(path: &Path) -> Result<ConciergeConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ConciergeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ConciergeConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"backend\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"location\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ConciergeConfig::default();
        let json = config_to_json(&config);
        let parsed: ConciergeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.backend.url, "http://127.0.0.1:8000/chat");
        assert_eq!(parsed.session.user_id, "GUEST");
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nlatitude = 120.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_missing_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(!path.exists());
    }
}
