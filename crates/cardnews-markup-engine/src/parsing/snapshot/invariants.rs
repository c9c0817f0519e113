use crate::{
    document::Document,
    parsing::{
        blocks::{Block, RawBlock, kinds::Callout, segment},
        inline::InlineRun,
        patterns,
    },
};

/// Validates parser output invariants against the source it came from.
///
/// Asserts that:
/// - Heading levels are 1 to 3 and image URLs are non-empty
/// - Every text field has at least one run
/// - Plain runs are never adjacent and only empty when they are the sole run
/// - Every non-blank source line is consumed by exactly one block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    for b in doc.blocks() {
        match b {
            Block::Heading { level, .. } => {
                assert!((1..=3).contains(level), "heading level out of range: {level}")
            }
            Block::Image { url } => assert!(!url.is_empty(), "image with empty url"),
            _ => {}
        }

        for text in b.texts() {
            let runs = text.runs();
            assert!(!runs.is_empty(), "text field without runs in {}", b.kind_name());
            for pair in runs.windows(2) {
                let adjacent_plain = matches!(
                    pair,
                    [InlineRun::PlainText { .. }, InlineRun::PlainText { .. }]
                );
                assert!(!adjacent_plain, "adjacent plain runs: {pair:?}");
            }
            if runs.len() > 1 {
                let has_empty_plain = runs
                    .iter()
                    .any(|r| matches!(r, InlineRun::PlainText { value } if value.is_empty()));
                assert!(!has_empty_plain, "empty plain run among others: {runs:?}");
            }
        }
    }

    let raw = segment(source);
    let raw_kinds: Vec<_> = raw.iter().map(|b| b.kind_name()).collect();
    let doc_kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind_name()).collect();
    assert_eq!(raw_kinds, doc_kinds, "document does not match its segmentation");

    check_coverage(source, &raw);
}

/// Asserts that `blocks` account for every non-blank line of `source`.
///
/// Callout delimiters count as consumed by their callout. Only the last block
/// can be an unclosed callout, and it is closed exactly when the last
/// non-blank line is a closer.
pub fn check_coverage(source: &str, blocks: &[RawBlock]) {
    let non_blank: Vec<&str> = source
        .split('\n')
        .filter(|l| !patterns::is_blank(l))
        .collect();

    let callouts = blocks
        .iter()
        .filter(|b| matches!(b, Block::Callout { .. }))
        .count();
    let last_is_open_callout = matches!(blocks.last(), Some(Block::Callout { .. }))
        && !non_blank.last().is_some_and(|l| Callout::closes(l));
    let closers = callouts - usize::from(last_is_open_callout);

    let consumed: usize = blocks.iter().map(lines_consumed).sum::<usize>() + closers;
    assert_eq!(
        consumed,
        non_blank.len(),
        "blocks consume {consumed} of {} non-blank lines",
        non_blank.len()
    );
}

/// Non-blank source lines behind one block, not counting a callout closer.
fn lines_consumed(block: &RawBlock) -> usize {
    match block {
        Block::Heading { .. }
        | Block::Paragraph { .. }
        | Block::Image { .. }
        | Block::Divider => 1,
        Block::Blockquote { text } => text.split('\n').count(),
        Block::UnorderedList { items } | Block::OrderedList { items } => items.len(),
        Block::Callout { text, .. } => {
            1 + text.split('\n').filter(|l| !patterns::is_blank(l)).count()
        }
    }
}
