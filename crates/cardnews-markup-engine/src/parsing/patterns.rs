//! # Pattern Table
//!
//! Every recognizer the block segmenter and inline resolver use lives here as
//! constant data. Block kinds and inline families call these accessors; they
//! never spell out a delimiter or regex themselves.
//!
//! Regexes are compiled once on first use and shared for the life of the
//! process.

use std::sync::OnceLock;

use regex::Regex;

/// Character class for markup whitespace, used wherever a pattern needs `\s`.
///
/// Narrower than the `regex` crate's Unicode `\s`: U+0085 is not whitespace
/// here, U+FEFF is.
macro_rules! space {
    () => {
        r"[\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]"
    };
}

/// Callout opener: `:::tip`, `:::warning` or `:::info`, trailing whitespace allowed.
pub const CALLOUT_OPEN: &str = concat!(r"^:::(tip|warning|info)", space!(), r"*$");
/// Callout closer: a bare `:::`, trailing whitespace allowed.
pub const CALLOUT_CLOSE: &str = concat!(r"^:::", space!(), r"*$");
/// Three or more hyphens and nothing else.
pub const DIVIDER: &str = r"^-{3,}$";
/// A line that is entirely one image: `![alt](url)`.
pub const STANDALONE_IMAGE: &str = r"^!\[([^\]]*)\]\(([^)]+)\)$";
/// Unordered list marker. Either marker continues a run.
pub const UNORDERED_ITEM: &str = concat!(r"^[-*]", space!());
/// Ordered list marker: ASCII digits only, so full-width `１.` is prose.
pub const ORDERED_ITEM: &str = concat!(r"^[0-9]+\.", space!());

/// True for the characters matched by the markup whitespace class.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// A line that is empty or holds only markup whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Blockquote line prefix, stripped from each quoted line.
pub const QUOTE_PREFIX: &str = "> ";

/// Heading prefixes, checked in this order; the first match wins.
pub const HEADING_PREFIXES: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

/// Inline link: `[text](url)`. Link text is never resolved further.
pub const LINK: &str = r"\[([^\]]+)\]\(([^)]+)\)";
/// Inline bold: `**text**` with at least one non-`*` character inside.
pub const BOLD: &str = r"\*\*([^*]+)\*\*";
/// Inline italic: `*text*` with at least one non-`*` character inside.
pub const ITALIC: &str = r"\*([^*]+)\*";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in pattern must compile"))
}

macro_rules! pattern_accessor {
    ($(#[$doc:meta])* $name:ident => $pattern:expr) => {
        $(#[$doc])*
        pub fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            compiled(&RE, $pattern)
        }
    };
}

pattern_accessor!(
    /// Compiled [`CALLOUT_OPEN`].
    callout_open => CALLOUT_OPEN
);
pattern_accessor!(
    /// Compiled [`CALLOUT_CLOSE`].
    callout_close => CALLOUT_CLOSE
);
pattern_accessor!(
    /// Compiled [`DIVIDER`].
    divider => DIVIDER
);
pattern_accessor!(
    /// Compiled [`STANDALONE_IMAGE`].
    standalone_image => STANDALONE_IMAGE
);
pattern_accessor!(
    /// Compiled [`UNORDERED_ITEM`].
    unordered_item => UNORDERED_ITEM
);
pattern_accessor!(
    /// Compiled [`ORDERED_ITEM`].
    ordered_item => ORDERED_ITEM
);
pattern_accessor!(
    /// Compiled [`LINK`].
    link => LINK
);
pattern_accessor!(
    /// Compiled [`BOLD`].
    bold => BOLD
);
pattern_accessor!(
    /// Compiled [`ITALIC`].
    italic => ITALIC
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn all_patterns_compile() {
        for re in [
            callout_open(),
            callout_close(),
            divider(),
            standalone_image(),
            unordered_item(),
            ordered_item(),
            link(),
            bold(),
            italic(),
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn accessors_return_the_same_instance() {
        assert!(std::ptr::eq(link(), link()));
    }

    #[rstest]
    #[case(":::tip", true)]
    #[case(":::warning  ", true)]
    #[case(":::info\t", true)]
    #[case(":::note", false)]
    #[case(" :::tip", false)]
    #[case(":::tips", false)]
    fn callout_opener(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(callout_open().is_match(line), expected);
    }

    #[rstest]
    #[case("---", true)]
    #[case("-----", true)]
    #[case("--", false)]
    #[case("--- ", false)]
    #[case("- - -", false)]
    fn divider_line(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(divider().is_match(line), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case(" \t\r", true)]
    #[case("\u{3000}", true)]
    #[case("\u{FEFF}", true)]
    #[case("\u{85}", false)]
    #[case(" x ", false)]
    fn blank_line(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_blank(line), expected);
    }

    #[test]
    fn space_class_agrees_with_is_space() {
        let class = Regex::new(concat!("^", space!(), "$")).unwrap();
        let samples = [
            '\t', ' ', '\u{A0}', '\u{2005}', '\u{3000}', '\u{FEFF}', '\u{85}', 'x', '\u{200B}',
        ];
        for c in samples {
            assert_eq!(class.is_match(&c.to_string()), is_space(c), "{c:?}");
        }
    }

    #[test]
    fn heading_prefixes_are_longest_first() {
        let lens: Vec<usize> = HEADING_PREFIXES.iter().map(|(p, _)| p.len()).collect();
        assert_eq!(lens, vec![4, 3, 2]);
    }
}
