//! Terminal front end: a `ChatView` that prints to stdout.

use std::io;

use concierge_client::markup::{MarkupLine, SpanStyle};
use concierge_client::{ChatView, LocationStatus, Message, MessageBody, Transcript};
use concierge_common::Origin;
use concierge_config::schema::DisplayConfig;
use console::{Style, Term};

const USER_LABEL: &str = "you";
const AGENT_LABEL: &str = "concierge";

/// How much of the exchange is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A person at a tty: prompt shown, typed input already echoed.
    Interactive,
    /// Queries piped on stdin: each query is printed before its reply.
    Piped,
    /// `--once`: only the reply is printed.
    Once,
}

pub struct TerminalView {
    transcript: Transcript,
    term: Term,
    mode: Mode,
    pending_text: String,
    show_timestamps: bool,
    pending_visible: bool,
    prompt_visible: bool,
}

impl TerminalView {
    pub fn new(display: &DisplayConfig, mode: Mode) -> Self {
        if display.no_color {
            console::set_colors_enabled(false);
        }
        let transcript = if display.markdown {
            Transcript::new()
        } else {
            Transcript::new().without_markup()
        };
        Self {
            transcript,
            term: Term::stdout(),
            mode,
            pending_text: display.pending_text.clone(),
            show_timestamps: display.show_timestamps,
            pending_visible: false,
            prompt_visible: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Print an informational line that is not part of the chat.
    pub fn note(&mut self, text: &str) {
        if self.mode == Mode::Once {
            return;
        }
        let line = Style::new().dim().apply_to(text).to_string();
        self.around_prompt(|term| term.write_line(&line));
    }

    /// Print `write` on its own line, keeping a visible prompt intact.
    fn around_prompt(&mut self, write: impl FnOnce(&Term) -> io::Result<()>) {
        let reprompt = self.prompt_visible;
        let result = (|| {
            if reprompt {
                self.term.clear_line()?;
            }
            write(&self.term)?;
            if reprompt {
                self.term.write_str(&prompt())?;
            }
            self.term.flush()
        })();
        if let Err(e) = result {
            tracing::warn!("terminal write failed: {e}");
        }
    }

    fn print_message(&self, message: &Message) -> io::Result<()> {
        let (label, label_style) = match message.origin {
            Origin::User => (USER_LABEL, Style::new().green().bold()),
            Origin::Agent => (AGENT_LABEL, Style::new().cyan().bold()),
        };
        let mut header = String::new();
        if self.show_timestamps {
            let stamp = message.sent_at.format("[%H:%M] ").to_string();
            header.push_str(&Style::new().dim().apply_to(stamp).to_string());
        }
        header.push_str(&label_style.apply_to(label).to_string());
        header.push_str(" › ");

        let body: Vec<String> = match &message.body {
            MessageBody::Text(text) => text.lines().map(str::to_string).collect(),
            MessageBody::Markup(lines) => lines.iter().map(styled_line).collect(),
        };

        let indent = " ".repeat(label.len() + 3);
        let mut first = true;
        for line in body.iter().map(String::as_str).chain(body.is_empty().then_some("")) {
            if first {
                self.term.write_line(&format!("{header}{line}"))?;
                first = false;
            } else if line.is_empty() {
                self.term.write_line("")?;
            } else {
                self.term.write_line(&format!("{indent}{line}"))?;
            }
        }
        Ok(())
    }
}

fn prompt() -> String {
    format!("{} › ", Style::new().green().bold().apply_to(USER_LABEL))
}

fn span_style(style: SpanStyle) -> Style {
    let mut out = Style::new();
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    if style.strikethrough {
        out = out.strikethrough();
    }
    if style.code {
        out = out.yellow();
    }
    if style.link {
        out = out.blue().underlined();
    }
    if style.heading {
        out = out.underlined();
    }
    if style.quote {
        out = out.dim();
    }
    out
}

fn styled_line(line: &MarkupLine) -> String {
    line.spans
        .iter()
        .map(|span| {
            if span.style.is_plain() {
                span.text.clone()
            } else {
                span_style(span.style).apply_to(&span.text).to_string()
            }
        })
        .collect()
}

impl ChatView for TerminalView {
    fn render(&mut self, content: &str, origin: Origin) {
        self.transcript.render(content, origin);
        let echoed = origin == Origin::User && self.mode != Mode::Piped;
        if echoed {
            return;
        }
        if let Some(message) = self.transcript.last_message() {
            if let Err(e) = self.print_message(message) {
                tracing::warn!("terminal write failed: {e}");
            }
        }
    }

    fn show_pending(&mut self) {
        self.transcript.show_pending();
        if self.term.is_term() {
            let line = Style::new().dim().italic().apply_to(&self.pending_text).to_string();
            match self.term.write_line(&line) {
                Ok(()) => self.pending_visible = true,
                Err(e) => tracing::warn!("terminal write failed: {e}"),
            }
        }
    }

    fn clear_pending(&mut self) {
        self.transcript.clear_pending();
        if std::mem::take(&mut self.pending_visible) {
            if let Err(e) = self.term.clear_last_lines(1) {
                tracing::warn!("terminal write failed: {e}");
            }
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.transcript.set_input_enabled(enabled);
        if !enabled {
            self.prompt_visible = false;
        }
    }

    fn focus_input(&mut self) {
        self.transcript.focus_input();
        if self.mode != Mode::Interactive || !self.transcript.input_enabled() {
            return;
        }
        let result = self
            .term
            .write_str(&prompt())
            .and_then(|()| self.term.flush());
        match result {
            Ok(()) => self.prompt_visible = true,
            Err(e) => tracing::warn!("terminal write failed: {e}"),
        }
    }

    fn set_location_status(&mut self, status: &LocationStatus) {
        let changed = self.transcript.location_status() != Some(status);
        self.transcript.set_location_status(status);
        if !changed {
            return;
        }
        let text = match status {
            LocationStatus::Located(coords) => format!("· {} ({coords})", status.label()),
            _ => format!("· {}", status.label()),
        };
        self.note(&text);
    }
}
