//! # Block Segmenting
//!
//! Two-phase block segmenting over the lines of a document.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (blank, heading, quote marker, ...)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open run (callout, quote, or list) and emits `RawBlock`s in source order
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `RawBlock`, `CalloutKind`
//! - **`kinds`**: block-specific syntax owners (Callout, Heading, List, ...)
//! - **`classify`**: `MarkupLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine and the `segment` entry point
//!
//! ## Key Invariants
//!
//! - Blocks are flat; nothing nests
//! - Callout bodies are raw zones: no block classification inside
//! - Paragraphs are exactly one line
//! - Every non-blank line outside callout delimiters lands in exactly one block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, segment};
pub use classify::{LineClass, MarkupLineClassifier};
pub use types::{Block, CalloutKind, RawBlock};
