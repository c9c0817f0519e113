//! Turns a parsed [`Document`] into styled terminal lines.

use cardnews_markup_engine::{Block, CalloutKind, Document, InlineRun, RichText};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_callout_icons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_callout_icons: true,
        }
    }
}

/// Renders every block in order, with a blank line after each.
pub fn render_document(doc: &Document, options: RenderOptions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in doc {
        match block {
            Block::Heading { level, text } => {
                let style = heading_style(*level);
                let prefix = Span::styled(format!("{} ", "#".repeat(*level as usize)), style);
                lines.extend(text_lines(text, vec![prefix], style));
            }
            Block::Paragraph { text } => {
                lines.extend(text_lines(text, vec![], Style::default()));
            }
            Block::Blockquote { text } => {
                let style = Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC);
                for mut line in text_lines(text, vec![], style) {
                    line.spans.insert(0, Span::styled("│ ", style));
                    lines.push(line);
                }
            }
            Block::Image { url } => {
                lines.push(Line::from(Span::styled(
                    format!("[image: {url}]"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Block::Divider => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Block::UnorderedList { items } => {
                for item in items {
                    lines.extend(text_lines(item, vec![Span::raw("• ")], Style::default()));
                }
            }
            Block::OrderedList { items } => {
                // Items are numbered by position, the source numbers are not kept.
                for (i, item) in items.iter().enumerate() {
                    let marker = Span::raw(format!("{}. ", i + 1));
                    lines.extend(text_lines(item, vec![marker], Style::default()));
                }
            }
            Block::Callout { kind, text } => {
                let style = Style::default().fg(callout_color(*kind));
                lines.push(Line::from(Span::styled(
                    callout_title(*kind, options),
                    style.add_modifier(Modifier::BOLD),
                )));
                for mut line in text_lines(text, vec![], Style::default()) {
                    line.spans.insert(0, Span::styled("┃ ", style));
                    lines.push(line);
                }
            }
        }
        lines.push(Line::default());
    }

    lines
}

/// Plain-text rendering, one terminal line per output line.
pub fn dump_text(doc: &Document, options: RenderOptions) -> String {
    render_document(doc, options)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn callout_title(kind: CalloutKind, options: RenderOptions) -> String {
    if options.show_callout_icons {
        format!("{} {}", kind.icon(), kind.label())
    } else {
        kind.label().to_string()
    }
}

fn callout_color(kind: CalloutKind) -> Color {
    match kind {
        CalloutKind::Tip => Color::Green,
        CalloutKind::Warning => Color::Yellow,
        CalloutKind::Info => Color::Blue,
    }
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Lays out the runs of `text`, breaking lines at embedded `\n`.
///
/// `lead` is prepended to the first line only. `base` is patched under each
/// run's own style.
fn text_lines(text: &RichText, lead: Vec<Span<'static>>, base: Style) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut current = lead;

    for run in text.runs() {
        let (value, style, suffix) = match run {
            InlineRun::PlainText { value } => (value, base, None),
            InlineRun::Bold { value } => (value, base.add_modifier(Modifier::BOLD), None),
            InlineRun::Italic { value } => (value, base.add_modifier(Modifier::ITALIC), None),
            InlineRun::Link { text, url } => (
                text,
                base.fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED),
                Some(url),
            ),
        };

        for (i, piece) in value.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
        if let Some(url) = suffix {
            current.push(Span::styled(
                format!(" ({url})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    lines.push(Line::from(current));
    lines
}
