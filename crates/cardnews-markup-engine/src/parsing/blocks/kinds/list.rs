use crate::parsing::patterns;

/// List item markers.
///
/// Runs of consecutive item lines form one list. The marker is stripped by
/// exactly the matched length, so `10. ten` and `1. one` both yield their text.
pub struct List;

impl List {
    /// Item text of a `- ` or `* ` line.
    pub fn unordered_item(line: &str) -> Option<&str> {
        patterns::unordered_item()
            .find(line)
            .map(|m| &line[m.end()..])
    }

    /// Item text of an `N. ` line, `N` being ASCII digits.
    pub fn ordered_item(line: &str) -> Option<&str> {
        patterns::ordered_item().find(line).map(|m| &line[m.end()..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- one", Some("one"))]
    #[case("* two", Some("two"))]
    #[case("-\tthree", Some("three"))]
    #[case("- ", Some(""))]
    #[case("-x", None)]
    #[case("---", None)]
    #[case(" - indented", None)]
    #[case("-\u{3000}ideographic space", Some("ideographic space"))]
    #[case("-\u{85}next line", None)]
    fn unordered(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(List::unordered_item(line), expected);
    }

    #[rstest]
    #[case("1. first", Some("first"))]
    #[case("10. tenth", Some("tenth"))]
    #[case("123.  wide", Some(" wide"))]
    #[case("1.first", None)]
    #[case("1) first", None)]
    #[case("a. first", None)]
    #[case("１. x", None)]
    #[case("١٢. arabic-indic", None)]
    fn ordered(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(List::ordered_item(line), expected);
    }
}
