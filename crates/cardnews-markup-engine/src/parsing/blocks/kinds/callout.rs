use crate::parsing::patterns;

use crate::parsing::blocks::types::CalloutKind;

/// Callout container syntax and presentation data.
///
/// A callout opens with `:::kind` and closes with a bare `:::`. Everything in
/// between is collected verbatim, blank lines included.
pub struct Callout;

/// `(kind, keyword, label, icon)`, indexed by the kind's discriminant.
const PRESENTATION: [(CalloutKind, &str, &str, &str); 3] = [
    (CalloutKind::Tip, "tip", "Tip", "💡"),
    (CalloutKind::Warning, "warning", "Warning", "⚠️"),
    (CalloutKind::Info, "info", "Info", "ℹ️"),
];

impl Callout {
    /// Returns the callout kind if `line` opens a callout.
    pub fn opens(line: &str) -> Option<CalloutKind> {
        let caps = patterns::callout_open().captures(line)?;
        CalloutKind::from_name(caps.get(1)?.as_str())
    }

    /// Returns true if `line` closes the currently open callout.
    pub fn closes(line: &str) -> bool {
        patterns::callout_close().is_match(line)
    }
}

impl CalloutKind {
    fn presentation(self) -> (&'static str, &'static str, &'static str) {
        let (_, name, label, icon) = PRESENTATION[self as usize];
        (name, label, icon)
    }

    /// Parses the keyword used in the opener (`tip`, `warning`, `info`).
    pub fn from_name(name: &str) -> Option<Self> {
        PRESENTATION
            .iter()
            .find(|(_, keyword, ..)| *keyword == name)
            .map(|(kind, ..)| *kind)
    }

    /// The opener keyword.
    pub fn name(self) -> &'static str {
        self.presentation().0
    }

    /// Human-readable heading shown above the callout body.
    pub fn label(self) -> &'static str {
        self.presentation().1
    }

    pub fn icon(self) -> &'static str {
        self.presentation().2
    }
}
