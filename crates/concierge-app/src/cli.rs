use std::path::PathBuf;

use clap::Parser;

/// Concierge: chat with a support agent from the terminal.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chat endpoint URL, e.g. http://127.0.0.1:8000/chat.
    #[arg(long)]
    pub url: Option<String>,

    /// Start the session with this user id instead of the configured one.
    #[arg(long)]
    pub user_id: Option<String>,

    /// Fixed latitude to send (requires --lon).
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Fixed longitude to send (requires --lat).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Skip location lookup and send the default coordinates.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub no_location: bool,

    /// Print agent replies as raw text.
    #[arg(long)]
    pub no_markdown: bool,

    /// Send one query, print the reply, and exit.
    #[arg(long, value_name = "QUERY")]
    pub once: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_interactive() {
        let args = Args::try_parse_from(["concierge"]).unwrap();
        assert!(args.once.is_none());
        assert!(!args.no_location);
        assert!(args.url.is_none());
    }

    #[test]
    fn fixed_location_accepts_negative_values() {
        let args =
            Args::try_parse_from(["concierge", "--lat", "-33.87", "--lon", "151.21"]).unwrap();
        assert_eq!(args.lat, Some(-33.87));
        assert_eq!(args.lon, Some(151.21));
    }

    #[test]
    fn lat_requires_lon() {
        assert!(Args::try_parse_from(["concierge", "--lat", "10"]).is_err());
    }

    #[test]
    fn no_location_conflicts_with_fixed() {
        let result = Args::try_parse_from([
            "concierge",
            "--no-location",
            "--lat",
            "1",
            "--lon",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn once_takes_a_query() {
        let args = Args::try_parse_from(["concierge", "--once", "Where is my order?"]).unwrap();
        assert_eq!(args.once.as_deref(), Some("Where is my order?"));
    }
}
