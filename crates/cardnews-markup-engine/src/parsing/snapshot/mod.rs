//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a parsed document to a stable `Snap` form for
//!   `insta` snapshot testing
//! - **`invariants`**: runtime checks for parser correctness (heading levels
//!   in range, no text field without runs, no adjacent plain runs, no more
//!   blocks than non-blank lines)
//!
//! ## Testing Strategy
//!
//! Parsing behaviour is pinned by fixture documents and their snapshots rather
//! than by a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{BlockSnap, InlineSnap, Snap, normalize};
