//! Full configuration validation.
//!
//! Validates numeric ranges, the backend URL, and location settings.
//! Each section has its own function; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::ConciergeConfig;
use concierge_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ConciergeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_backend(&mut errors, config);
    misc::validate_session(&mut errors, config);
    misc::validate_location(&mut errors, config);
    misc::validate_display(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
