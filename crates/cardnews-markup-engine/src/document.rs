use serde::Serialize;

use crate::parsing::{ResolvedBlock, blocks::Block, inline::InlineRun, parse_document};

/// The complete, resolved content of one source string.
///
/// Built once and never mutated; when the source changes, parse a new one.
/// Blocks keep source order and are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<ResolvedBlock>,
}

impl Document {
    pub(crate) fn new(blocks: Vec<ResolvedBlock>) -> Self {
        Self { blocks }
    }

    /// Parses `source`. Never fails.
    pub fn parse(source: &str) -> Self {
        parse_document(source)
    }

    pub fn blocks(&self) -> &[ResolvedBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// `(level, visible text)` for every heading, for building an outline.
    pub fn headings(&self) -> impl Iterator<Item = (u8, String)> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading { level, text } => Some((*level, text.plain_text())),
            _ => None,
        })
    }

    /// URLs of standalone images, in order. Hosts use this to prefetch.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Image { url } => Some(url.as_str()),
            _ => None,
        })
    }

    /// `(text, url)` of every link run in every text field.
    pub fn links(&self) -> Vec<(&str, &str)> {
        self.blocks
            .iter()
            .flat_map(|b| b.texts())
            .flat_map(|t| t.runs())
            .filter_map(|run| match run {
                InlineRun::Link { text, url } => Some((text.as_str(), url.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Visible text of the whole document, one line per text field.
    ///
    /// Images and dividers contribute nothing. Useful for previews and search.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(|b| b.texts())
            .map(|t| t.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ResolvedBlock;
    type IntoIter = std::slice::Iter<'a, ResolvedBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
