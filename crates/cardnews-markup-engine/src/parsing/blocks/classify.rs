use super::{
    kinds::{BlockQuote, Callout, Divider, Heading, Image, List},
    types::CalloutKind,
};
use crate::parsing::patterns;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Lines inside an open callout are
/// never classified; the builder only asks whether they close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or markup whitespace only.
    Blank,
    CalloutOpen(CalloutKind),
    Heading {
        level: u8,
        text: &'a str,
    },
    Divider,
    /// Quote content with the `> ` prefix removed.
    Quote(&'a str),
    /// Standalone image. `alt` is recognised but not carried into the block.
    Image {
        alt: &'a str,
        url: &'a str,
    },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    /// Anything else, verbatim.
    Text(&'a str),
}

/// Classifies individual lines for the block segmenting phase.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in a fixed order and the first match wins: blank,
    /// callout opener, heading, divider, blockquote, standalone image,
    /// unordered item, ordered item, then plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if patterns::is_blank(line) {
            return LineClass::Blank;
        }
        if let Some(kind) = Callout::opens(line) {
            return LineClass::CalloutOpen(kind);
        }
        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }
        if Divider::matches(line) {
            return LineClass::Divider;
        }
        if let Some(text) = BlockQuote::strip(line) {
            return LineClass::Quote(text);
        }
        if let Some(parts) = Image::standalone(line) {
            return LineClass::Image {
                alt: parts.alt,
                url: parts.url,
            };
        }
        if let Some(item) = List::unordered_item(line) {
            return LineClass::UnorderedItem(item);
        }
        if let Some(item) = List::ordered_item(line) {
            return LineClass::OrderedItem(item);
        }
        LineClass::Text(line)
    }
}
