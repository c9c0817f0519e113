use crate::parsing::patterns::QUOTE_PREFIX;

/// Blockquote line syntax.
///
/// Only the exact `> ` prefix counts; a bare `>` or `>text` is ordinary text.
/// Quotes do not nest, so `> > a` is a quote line whose content is `> a`.
pub struct BlockQuote;

impl BlockQuote {
    /// Strips the quote prefix, returning the quoted content.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(QUOTE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip("> hello"), Some("hello"));
    }

    #[test]
    fn strip_keeps_inner_markers() {
        assert_eq!(BlockQuote::strip("> > hello"), Some("> hello"));
    }

    #[test]
    fn empty_quote_line() {
        assert_eq!(BlockQuote::strip("> "), Some(""));
    }

    #[test]
    fn no_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip(">hello"), None);
        assert_eq!(BlockQuote::strip(">"), None);
    }
}
