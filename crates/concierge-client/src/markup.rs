//! Markdown rendering for agent replies.
//!
//! Agent text is parsed as CommonMark and flattened into lines of styled
//! spans. Markup characters never reach the output; the spans carry the
//! emphasis instead, so a terminal (or any other front end) only has to
//! map `SpanStyle` to its own attributes.

use pulldown_cmark::{Event, Options, Parser, Tag};

const LIST_INDENT: &str = "  ";
const CODE_INDENT: &str = "    ";
const RULE_WIDTH: usize = 24;

/// Attributes of a rendered span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
    pub heading: bool,
    pub quote: bool,
}

impl SpanStyle {
    pub fn is_plain(&self) -> bool {
        *self == SpanStyle::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupLine {
    pub spans: Vec<MarkupSpan>,
}

impl MarkupLine {
    fn push(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(MarkupSpan {
            text: text.to_string(),
            style,
        });
    }

    /// The line's text with all styling dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

/// Join rendered lines back into plain text.
pub fn plain_text(lines: &[MarkupLine]) -> String {
    lines
        .iter()
        .map(MarkupLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug)]
struct ListState {
    next: Option<u64>,
}

#[derive(Default)]
struct Renderer {
    lines: Vec<MarkupLine>,
    current: MarkupLine,
    styles: Vec<SpanStyle>,
    lists: Vec<ListState>,
    item_marker: Option<String>,
    quote_depth: usize,
    in_code_block: bool,
    links: Vec<String>,
}

impl Renderer {
    fn style(&self) -> SpanStyle {
        let mut style = self.styles.last().copied().unwrap_or_default();
        style.quote = self.quote_depth > 0;
        style
    }

    fn push_style(&mut self, apply: impl FnOnce(&mut SpanStyle)) {
        let mut style = self.styles.last().copied().unwrap_or_default();
        apply(&mut style);
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    /// Emit the prefixes owed at the start of a line.
    fn start_line(&mut self) {
        if self.quote_depth > 0 {
            let quote = SpanStyle {
                quote: true,
                ..SpanStyle::default()
            };
            self.current.push(&"> ".repeat(self.quote_depth), quote);
        }
        if let Some(marker) = self.item_marker.take() {
            self.current.push(&marker, SpanStyle::default());
        } else if !self.lists.is_empty() {
            self.current
                .push(&LIST_INDENT.repeat(self.lists.len()), SpanStyle::default());
        }
    }

    fn push_text(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        if self.current.spans.is_empty() {
            self.start_line();
        }
        self.current.push(text, style);
    }

    fn finish_line(&mut self) {
        if !self.current.spans.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    /// Close the current line and leave a blank line before the next
    /// top-level block.
    fn separate_block(&mut self) {
        self.finish_line();
        let nested = !self.lists.is_empty();
        if !nested && self.lines.last().is_some_and(|l| !l.is_blank()) {
            self.lines.push(MarkupLine::default());
        }
    }

    fn code_text(&mut self, text: &str) {
        let style = SpanStyle {
            code: true,
            ..self.style()
        };
        for line in text.lines() {
            self.push_text(CODE_INDENT, SpanStyle::default());
            self.current.push(line, style);
            self.finish_line();
        }
    }

    /// Raw HTML: tags are dropped, `<br>` breaks the line, and the text
    /// between tags is kept.
    fn html(&mut self, html: &str) {
        let mut rest = html;
        while let Some(open) = rest.find('<') {
            self.html_text(&rest[..open]);
            let Some(close) = rest[open..].find('>') else {
                self.html_text(&rest[open..]);
                return;
            };
            if is_line_break(&rest[open + 1..open + close]) {
                self.finish_line();
            }
            rest = &rest[open + close + 1..];
        }
        self.html_text(rest);
    }

    fn html_text(&mut self, text: &str) {
        let style = self.style();
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.finish_line();
            }
            self.push_text(segment, style);
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.separate_block(),
            Tag::Heading(..) => {
                self.separate_block();
                self.push_style(|s| {
                    s.heading = true;
                    s.bold = true;
                });
            }
            Tag::BlockQuote => {
                self.separate_block();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(_) => {
                self.separate_block();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.separate_block();
                } else {
                    self.finish_line();
                }
                self.lists.push(ListState { next: start });
            }
            Tag::Item => {
                self.finish_line();
                let depth = self.lists.len().saturating_sub(1);
                let bullet = match self.lists.last_mut() {
                    Some(ListState { next: Some(n) }) => {
                        let bullet = format!("{n}. ");
                        *n += 1;
                        bullet
                    }
                    _ => "• ".to_string(),
                };
                self.item_marker = Some(format!("{}{bullet}", LIST_INDENT.repeat(depth)));
            }
            Tag::Emphasis => self.push_style(|s| s.italic = true),
            Tag::Strong => self.push_style(|s| s.bold = true),
            Tag::Strikethrough => self.push_style(|s| s.strikethrough = true),
            Tag::Link(_, dest, _) | Tag::Image(_, dest, _) => {
                self.links.push(dest.to_string());
                self.push_style(|s| s.link = true);
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.finish_line(),
            Tag::Heading(..) => {
                self.pop_style();
                self.finish_line();
            }
            Tag::BlockQuote => {
                self.finish_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.finish_line();
            }
            Tag::List(_) => {
                self.finish_line();
                self.lists.pop();
            }
            Tag::Item => {
                // An item with no text still shows its bullet.
                if let Some(marker) = self.item_marker.take() {
                    self.current.push(&marker, SpanStyle::default());
                }
                self.finish_line();
            }
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => self.pop_style(),
            Tag::Link(..) | Tag::Image(..) => {
                self.pop_style();
                if let Some(dest) = self.links.pop() {
                    let shown = self.current.spans.last().map(|s| s.text.as_str());
                    if !dest.is_empty() && shown != Some(dest.as_str()) {
                        let style = self.style();
                        self.push_text(&format!(" ({dest})"), style);
                    }
                }
            }
            _ => {}
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.in_code_block => self.code_text(&text),
            Event::Text(text) => {
                let style = self.style();
                self.push_text(&text, style);
            }
            Event::Html(html) => self.html(&html),
            Event::Code(text) => {
                let style = SpanStyle {
                    code: true,
                    ..self.style()
                };
                self.push_text(&text, style);
            }
            Event::SoftBreak => {
                let style = self.style();
                self.push_text(" ", style);
            }
            Event::HardBreak => self.finish_line(),
            Event::Rule => {
                self.separate_block();
                self.push_text(&"─".repeat(RULE_WIDTH), SpanStyle::default());
                self.finish_line();
            }
            Event::TaskListMarker(done) => {
                let mark = if done { "[x] " } else { "[ ] " };
                self.push_text(mark, SpanStyle::default());
            }
            Event::FootnoteReference(name) => {
                let style = self.style();
                self.push_text(&format!("[{name}]"), style);
            }
        }
    }

    fn finish(mut self) -> Vec<MarkupLine> {
        self.finish_line();
        while self.lines.last().is_some_and(MarkupLine::is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

fn is_line_break(tag: &str) -> bool {
    tag.trim_end_matches('/').trim().eq_ignore_ascii_case("br")
}

/// Render markdown source into styled lines.
pub fn render_markup(source: &str) -> Vec<MarkupLine> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(source, options) {
        renderer.event(event);
    }
    renderer.finish()
}
