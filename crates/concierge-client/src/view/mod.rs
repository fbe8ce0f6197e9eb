//! Presentation contract for the chat.
//!
//! `ChatView` is everything the adapter needs from a front end. The
//! in-memory `Transcript` implements it directly and is what the terminal
//! front end wraps.

mod transcript;

pub use transcript::{Entry, Message, MessageBody, Transcript};

use concierge_common::Origin;

use crate::location::LocationStatus;

/// Shown in place of a reply whenever an exchange fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Default placeholder shown while a request is in flight.
pub const PENDING_TEXT: &str = "Typing...";

pub trait ChatView {
    /// Append a message. User content is literal text; agent content is
    /// rendered as markup. The newest message must end up visible.
    fn render(&mut self, content: &str, origin: Origin);

    /// Show the single in-flight placeholder.
    fn show_pending(&mut self);

    /// Remove the placeholder. Only called while one is shown.
    fn clear_pending(&mut self);

    fn set_input_enabled(&mut self, enabled: bool);

    fn focus_input(&mut self);

    fn set_location_status(&mut self, status: &LocationStatus);
}
