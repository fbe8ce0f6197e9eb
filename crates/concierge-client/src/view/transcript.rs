//! In-memory chat history.

use chrono::{DateTime, Local};
use concierge_common::Origin;

use crate::location::LocationStatus;
use crate::markup::{self, MarkupLine};

use super::ChatView;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// Shown verbatim.
    Text(String),
    /// Parsed agent markup.
    Markup(Vec<MarkupLine>),
}

/// A rendered chat message. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Message {
    pub origin: Origin,
    pub content: String,
    pub body: MessageBody,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            origin: Origin::User,
            body: MessageBody::Text(content.clone()),
            content,
            sent_at: Local::now(),
        }
    }

    /// Agent message; `markdown` selects markup rendering over raw text.
    pub fn agent(content: impl Into<String>, markdown: bool) -> Self {
        let content = content.into();
        let body = if markdown {
            MessageBody::Markup(markup::render_markup(&content))
        } else {
            MessageBody::Text(content.clone())
        };
        Self {
            origin: Origin::Agent,
            content,
            body,
            sent_at: Local::now(),
        }
    }

    /// What the reader sees, without styling.
    pub fn display_text(&self) -> String {
        match &self.body {
            MessageBody::Text(text) => text.clone(),
            MessageBody::Markup(lines) => markup::plain_text(lines),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Entry {
    Message(Message),
    /// The in-flight placeholder.
    Pending,
}

/// Chat history plus input and status state.
///
/// The pending placeholder, when present, is always the last entry.
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: Vec<Entry>,
    markdown: bool,
    input_enabled: bool,
    focus_count: usize,
    location_status: Option<LocationStatus>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            markdown: true,
            input_enabled: true,
            focus_count: 0,
            location_status: None,
        }
    }

    /// Show agent replies as raw text instead of rendered markup.
    pub fn without_markup(mut self) -> Self {
        self.markdown = false;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Message(m) => Some(m),
            Entry::Pending => None,
        })
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.entries.iter().rev().find_map(|e| match e {
            Entry::Message(m) => Some(m),
            Entry::Pending => None,
        })
    }

    pub fn message_count(&self) -> usize {
        self.messages().count()
    }

    pub fn has_pending(&self) -> bool {
        matches!(self.entries.last(), Some(Entry::Pending))
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// How many times input focus has been requested.
    pub fn focus_count(&self) -> usize {
        self.focus_count
    }

    pub fn location_status(&self) -> Option<&LocationStatus> {
        self.location_status.as_ref()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for Transcript {
    fn render(&mut self, content: &str, origin: Origin) {
        let message = match origin {
            Origin::User => Message::user(content),
            Origin::Agent => Message::agent(content, self.markdown),
        };
        // Keep the placeholder last.
        if self.has_pending() {
            let at = self.entries.len() - 1;
            self.entries.insert(at, Entry::Message(message));
        } else {
            self.entries.push(Entry::Message(message));
        }
    }

    fn show_pending(&mut self) {
        if !self.has_pending() {
            self.entries.push(Entry::Pending);
        }
    }

    fn clear_pending(&mut self) {
        if self.has_pending() {
            self.entries.pop();
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn focus_input(&mut self) {
        self.focus_count += 1;
    }

    fn set_location_status(&mut self, status: &LocationStatus) {
        self.location_status = Some(status.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::SpanStyle;

    #[test]
    fn user_content_is_literal() {
        let mut t = Transcript::new();
        t.render("**not bold**", Origin::User);
        let msg = t.last_message().unwrap();
        assert_eq!(msg.body, MessageBody::Text("**not bold**".into()));
        assert_eq!(msg.display_text(), "**not bold**");
    }

    #[test]
    fn agent_content_is_markup() {
        let mut t = Transcript::new();
        t.render("**Hi!**", Origin::Agent);
        let msg = t.last_message().unwrap();
        match &msg.body {
            MessageBody::Markup(lines) => {
                assert_eq!(lines[0].spans[0].text, "Hi!");
                assert_eq!(
                    lines[0].spans[0].style,
                    SpanStyle {
                        bold: true,
                        ..SpanStyle::default()
                    }
                );
            }
            other => panic!("expected markup, got {other:?}"),
        }
        assert_eq!(msg.display_text(), "Hi!");
        assert_eq!(msg.content, "**Hi!**");
    }

    #[test]
    fn agent_content_raw_when_markup_disabled() {
        let mut t = Transcript::new().without_markup();
        t.render("**Hi!**", Origin::Agent);
        assert_eq!(t.last_message().unwrap().display_text(), "**Hi!**");
    }

    #[test]
    fn pending_is_single_and_last() {
        let mut t = Transcript::new();
        t.render("question", Origin::User);
        t.show_pending();
        t.show_pending();
        assert_eq!(t.entries().len(), 2);
        assert!(t.has_pending());

        // Rendering while pending keeps the placeholder last.
        t.render("late note", Origin::Agent);
        assert!(matches!(t.entries().last(), Some(Entry::Pending)));
        assert_eq!(t.message_count(), 2);

        t.clear_pending();
        assert!(!t.has_pending());
        assert_eq!(t.entries().len(), 2);
    }

    #[test]
    fn clear_without_pending_leaves_messages() {
        let mut t = Transcript::new();
        t.render("hello", Origin::User);
        t.clear_pending();
        assert_eq!(t.message_count(), 1);
    }

    #[test]
    fn input_and_status_state() {
        let mut t = Transcript::new();
        assert!(t.input_enabled());
        t.set_input_enabled(false);
        assert!(!t.input_enabled());
        t.focus_input();
        assert_eq!(t.focus_count(), 1);
        assert!(t.location_status().is_none());
        t.set_location_status(&LocationStatus::Unsupported);
        assert_eq!(t.location_status(), Some(&LocationStatus::Unsupported));
    }
}
