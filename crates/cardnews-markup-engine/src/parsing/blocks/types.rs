use serde::Serialize;

/// The semantic kind carried by a `:::kind` callout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Tip,
    Warning,
    Info,
}

/// One top-level structural unit of a document.
///
/// Blocks are flat: no variant holds another block. `T` is the text type of
/// every text-bearing field: a raw `String` straight out of the segmenter, or
/// resolved [`RichText`](crate::parsing::inline::RichText) once inline runs
/// have been computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block<T = String> {
    /// A single-line heading, level 1 to 3.
    Heading { level: u8, text: T },
    /// Exactly one source line.
    Paragraph { text: T },
    /// One or more consecutive `> ` lines, prefixes stripped, joined with `\n`.
    Blockquote { text: T },
    /// A line consisting solely of `![alt](url)`. The alt text is not kept.
    Image { url: String },
    Divider,
    UnorderedList { items: Vec<T> },
    OrderedList { items: Vec<T> },
    /// Everything between `:::kind` and `:::` (or end of input), verbatim.
    Callout { kind: CalloutKind, text: T },
}

/// A block whose text fields have not been inline-resolved yet.
pub type RawBlock = Block<String>;

impl<T> Block<T> {
    /// Converts every text field with `f`, keeping variant and order.
    pub fn map_text<U>(self, mut f: impl FnMut(T) -> U) -> Block<U> {
        match self {
            Block::Heading { level, text } => Block::Heading {
                level,
                text: f(text),
            },
            Block::Paragraph { text } => Block::Paragraph { text: f(text) },
            Block::Blockquote { text } => Block::Blockquote { text: f(text) },
            Block::Image { url } => Block::Image { url },
            Block::Divider => Block::Divider,
            Block::UnorderedList { items } => Block::UnorderedList {
                items: items.into_iter().map(&mut f).collect(),
            },
            Block::OrderedList { items } => Block::OrderedList {
                items: items.into_iter().map(&mut f).collect(),
            },
            Block::Callout { kind, text } => Block::Callout {
                kind,
                text: f(text),
            },
        }
    }

    /// All text fields of this block in source order.
    pub fn texts(&self) -> Vec<&T> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::Blockquote { text }
            | Block::Callout { text, .. } => vec![text],
            Block::UnorderedList { items } | Block::OrderedList { items } => items.iter().collect(),
            Block::Image { .. } | Block::Divider => vec![],
        }
    }

    /// Stable variant name, used by snapshots and the viewer.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::Blockquote { .. } => "Blockquote",
            Block::Image { .. } => "Image",
            Block::Divider => "Divider",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::OrderedList { .. } => "OrderedList",
            Block::Callout { .. } => "Callout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_text_keeps_variant_and_item_order() {
        let block: RawBlock = Block::OrderedList {
            items: vec!["a".into(), "bb".into()],
        };
        assert_eq!(
            block.map_text(|t| t.len()),
            Block::OrderedList { items: vec![1, 2] }
        );
    }

    #[test]
    fn map_text_leaves_payload_free_blocks_alone() {
        let image: RawBlock = Block::Image { url: "u".into() };
        assert_eq!(
            image.map_text(|t| t.len()),
            Block::Image { url: "u".into() }
        );
        assert_eq!(
            RawBlock::Divider.map_text(|t| t.len()),
            Block::<usize>::Divider
        );
    }

    #[test]
    fn texts_lists_every_field() {
        let quote: RawBlock = Block::Callout {
            kind: CalloutKind::Tip,
            text: "hint".into(),
        };
        assert_eq!(quote.texts(), vec![&"hint".to_string()]);
        assert!(RawBlock::Divider.texts().is_empty());
    }
}
