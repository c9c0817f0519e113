//! # Inline Kinds
//!
//! The three span families and their fixed priority.
//!
//! ## Priority
//!
//! Declaration order is priority order: `Link` beats `Bold` beats `Italic`
//! when two matches start at the same byte. The derived `Ord` encodes this,
//! so sorting never depends on sort stability.

use regex::Regex;

use crate::parsing::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanFamily {
    Link,
    Bold,
    Italic,
}

impl SpanFamily {
    /// All families, highest priority first.
    pub const PRIORITY: [SpanFamily; 3] = [SpanFamily::Link, SpanFamily::Bold, SpanFamily::Italic];

    /// The recognizer for this family.
    pub fn pattern(self) -> &'static Regex {
        match self {
            SpanFamily::Link => patterns::link(),
            SpanFamily::Bold => patterns::bold(),
            SpanFamily::Italic => patterns::italic(),
        }
    }
}
