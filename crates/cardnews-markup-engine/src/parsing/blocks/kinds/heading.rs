use crate::parsing::patterns::HEADING_PREFIXES;

/// ATX-style heading limited to levels 1 to 3.
///
/// The prefix must be exactly the hashes followed by a single space, so
/// `#### x` and `#x` are not headings.
pub struct Heading;

impl Heading {
    /// Returns `(level, rest of line)` for a heading line.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        HEADING_PREFIXES
            .iter()
            .find_map(|&(prefix, level)| line.strip_prefix(prefix).map(|rest| (level, rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("## Section", Some((2, "Section")))]
    #[case("### H3", Some((3, "H3")))]
    #[case("###  spaced", Some((3, " spaced")))]
    #[case("# ", Some((1, "")))]
    #[case("#### not heading", None)]
    #[case("#nospace", None)]
    #[case("##", None)]
    #[case(" # indented", None)]
    fn strip_heading(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::strip(line), expected);
    }
}
