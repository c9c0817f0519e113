use serde::Serialize;

use super::resolver::resolve_inline;

/// One styled span of a resolved text field.
///
/// Values hold the text the reader sees: delimiters such as `**` or `[..](..)`
/// are stripped. Link text is kept literally, markup characters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineRun {
    PlainText { value: String },
    Bold { value: String },
    Italic { value: String },
    Link { text: String, url: String },
}

impl InlineRun {
    pub fn plain(value: impl Into<String>) -> Self {
        InlineRun::PlainText {
            value: value.into(),
        }
    }

    pub fn bold(value: impl Into<String>) -> Self {
        InlineRun::Bold {
            value: value.into(),
        }
    }

    pub fn italic(value: impl Into<String>) -> Self {
        InlineRun::Italic {
            value: value.into(),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineRun::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// The text shown to the reader for this run.
    pub fn display_text(&self) -> &str {
        match self {
            InlineRun::PlainText { value }
            | InlineRun::Bold { value }
            | InlineRun::Italic { value } => value,
            InlineRun::Link { text, .. } => text,
        }
    }
}

/// A text field resolved into its ordered inline runs.
///
/// Never empty: text without any inline markup is a single plain run, even
/// when the text itself is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(Vec<InlineRun>);

impl RichText {
    /// Resolves `raw` into runs.
    pub fn resolve(raw: &str) -> Self {
        RichText(resolve_inline(raw))
    }

    pub fn runs(&self) -> &[InlineRun] {
        &self.0
    }

    pub fn into_runs(self) -> Vec<InlineRun> {
        self.0
    }

    /// Concatenated display text of every run.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(InlineRun::display_text).collect()
    }
}

impl From<&str> for RichText {
    fn from(raw: &str) -> Self {
        RichText::resolve(raw)
    }
}

impl From<String> for RichText {
    fn from(raw: String) -> Self {
        RichText::resolve(&raw)
    }
}
