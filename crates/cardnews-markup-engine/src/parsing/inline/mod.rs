//! # Inline Resolution
//!
//! Turns one raw text field into styled runs.
//!
//! ## Architecture
//!
//! Inline resolution is separate from block segmenting and runs over each text
//! field on its own: a heading, a paragraph, a whole quote or callout body, or
//! one list item.
//!
//! Unlike a cursor parser, every family scans the full string independently
//! and overlaps are settled afterwards:
//! - Hits are ordered by start offset, ties broken by family priority
//! - The first hit wins; anything starting inside it is dropped, never re-parsed
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun` (PlainText, Bold, Italic, Link) and `RichText`
//! - **`kinds`**: `SpanFamily` with its priority order and recognizer
//! - **`resolver`**: `resolve_inline()` entry point
//!
//! ## Precedence
//!
//! Links beat emphasis: `[**x**](u)` is one link whose text is `**x**`.

pub mod kinds;
pub mod resolver;
pub mod types;

pub use kinds::SpanFamily;
pub use resolver::resolve_inline;
pub use types::{InlineRun, RichText};
