//! Builds the client pieces from config and command-line overrides.

use std::sync::Arc;
use std::time::Duration;

use concierge_client::{
    ChatError, FixedLocation, HttpBackendConfig, HttpChatBackend, IpLocator, LocationProvider,
    NoLocation, Session,
};
use concierge_common::Coordinates;
use concierge_config::schema::{ConciergeConfig, LocationProviderKind};
use tracing_subscriber::filter::Directive;

use crate::cli::Args;

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(config: &mut ConciergeConfig, args: &Args) {
    if let Some(ref url) = args.url {
        config.backend.url = url.clone();
    }
    if let Some(ref user_id) = args.user_id {
        config.session.user_id = user_id.clone();
    }
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        config.location.provider = LocationProviderKind::Fixed;
        config.location.latitude = Some(lat);
        config.location.longitude = Some(lon);
    }
    if args.no_location {
        config.location.provider = LocationProviderKind::Disabled;
    }
    if args.no_markdown {
        config.display.markdown = false;
    }
}

const DEFAULT_LOG_DIRECTIVE: &str = "concierge=info";

/// Filter directive for the log subscriber: the CLI wins, then config.
pub fn log_directive(cli_level: Option<&str>, config: &ConciergeConfig) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("concierge={level}"),
        None => format!("concierge={}", config.logging.level.as_filter()),
    }
}

/// Parse a directive, falling back to `concierge=info` when it is invalid.
pub fn filter_directive(directive: &str) -> Option<Directive> {
    directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
        .ok()
}

pub fn build_backend(config: &ConciergeConfig) -> Result<HttpChatBackend, ChatError> {
    let backend = &config.backend;
    HttpChatBackend::new(
        HttpBackendConfig::new(backend.url.clone())
            .with_connect_timeout(Duration::from_secs(backend.connect_timeout.into()))
            .with_request_timeout(Duration::from_secs(backend.request_timeout.into())),
    )
}

pub fn build_session(config: &ConciergeConfig) -> Session {
    Session::new(
        config.session.user_id.clone(),
        Coordinates::new(config.session.latitude, config.session.longitude),
    )
}

pub fn build_location_provider(config: &ConciergeConfig) -> Arc<dyn LocationProvider> {
    let location = &config.location;
    match location.provider {
        LocationProviderKind::Ip => {
            let timeout = Duration::from_secs(location.timeout.into());
            match IpLocator::new(location.lookup_url.clone(), timeout) {
                Ok(locator) => Arc::new(locator),
                Err(e) => {
                    tracing::warn!("IP location unavailable: {e}");
                    Arc::new(NoLocation)
                }
            }
        }
        LocationProviderKind::Fixed => match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => Arc::new(FixedLocation(Coordinates::new(lat, lon))),
            _ => Arc::new(NoLocation),
        },
        LocationProviderKind::Disabled => Arc::new(NoLocation),
    }
}

/// How long the first submission may wait for the location lookup.
pub fn first_submit_wait(config: &ConciergeConfig) -> Duration {
    Duration::from_millis(config.location.first_submit_wait_ms.into())
}
