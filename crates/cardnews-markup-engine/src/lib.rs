pub mod cache;
pub mod document;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use cache::DocumentCache;
pub use document::Document;
pub use io::*;
pub use parsing::{
    ResolvedBlock,
    blocks::{Block, CalloutKind, RawBlock, segment},
    inline::{InlineRun, RichText, resolve_inline},
    parse_document, resolve_block,
};
