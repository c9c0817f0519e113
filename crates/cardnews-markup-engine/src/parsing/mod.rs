pub mod blocks;
pub mod inline;
pub mod patterns;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, RawBlock};
use inline::RichText;

use crate::document::Document;

/// A block whose text fields have been resolved into inline runs.
pub type ResolvedBlock = Block<RichText>;

/// Segments `source` into blocks and resolves every text field.
///
/// Total and deterministic: identical input yields an identical document.
pub fn parse_document(source: &str) -> Document {
    let blocks: Vec<ResolvedBlock> = blocks::segment(source)
        .into_iter()
        .map(resolve_block)
        .collect();
    log::trace!(
        "parsed {} blocks from {} bytes",
        blocks.len(),
        source.len()
    );
    Document::new(blocks)
}

/// Resolves the text fields of one raw block.
pub fn resolve_block(block: RawBlock) -> ResolvedBlock {
    block.map_text(|raw| RichText::resolve(&raw))
}
