use serde::{Deserialize, Serialize};

/// Terminal presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render agent replies as markdown. When false the raw text is printed.
    pub markdown: bool,
    /// Placeholder shown while a request is in flight.
    pub pending_text: String,
    pub show_timestamps: bool,
    /// Force ANSI colors off even on a capable terminal.
    pub no_color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            markdown: true,
            pending_text: "Typing...".into(),
            show_timestamps: false,
            no_color: false,
        }
    }
}
