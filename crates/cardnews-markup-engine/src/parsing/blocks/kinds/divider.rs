use crate::parsing::patterns;

/// Horizontal rule: a line of three or more hyphens.
pub struct Divider;

impl Divider {
    pub fn matches(line: &str) -> bool {
        patterns::divider().is_match(line)
    }
}
