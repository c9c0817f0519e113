use serde::Serialize;

use crate::{
    document::Document,
    parsing::{
        blocks::Block,
        inline::{InlineRun, RichText},
    },
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind with its scalar payload, e.g. `Heading(2)` or `Callout(tip)`.
    pub kind: String,
    /// One entry per text field, each the field's inline runs.
    pub fields: Vec<Vec<InlineSnap>>,
}

/// Snapshot of a single inline run.
#[derive(Debug, Serialize)]
pub struct InlineSnap {
    pub kind: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub fn normalize(doc: &Document) -> Snap {
    let blocks = doc
        .blocks()
        .iter()
        .map(|b| {
            let kind = match b {
                Block::Heading { level, .. } => format!("Heading({level})"),
                Block::Image { url } => format!("Image({url})"),
                Block::Callout { kind, .. } => format!("Callout({})", kind.name()),
                other => other.kind_name().to_string(),
            };
            BlockSnap {
                kind,
                fields: b.texts().into_iter().map(runs).collect(),
            }
        })
        .collect();

    Snap { blocks }
}

fn runs(text: &RichText) -> Vec<InlineSnap> {
    text.runs()
        .iter()
        .map(|run| match run {
            InlineRun::PlainText { value } => InlineSnap {
                kind: "PlainText",
                text: value.clone(),
                url: None,
            },
            InlineRun::Bold { value } => InlineSnap {
                kind: "Bold",
                text: value.clone(),
                url: None,
            },
            InlineRun::Italic { value } => InlineSnap {
                kind: "Italic",
                text: value.clone(),
                url: None,
            },
            InlineRun::Link { text, url } => InlineSnap {
                kind: "Link",
                text: text.clone(),
                url: Some(url.clone()),
            },
        })
        .collect()
}
