//! Behavioural tests for the full parse pipeline.
//!
//! Fixture-backed snapshot tests live in `tests/parsing_snapshots.rs`; these
//! pin the documented properties directly.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, CalloutKind, segment},
    inline::{InlineRun, RichText},
    parse_document, snapshot,
};

fn rich(raw: &str) -> RichText {
    RichText::resolve(raw)
}

/// Every input, however malformed, parses.
#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case(":::")]
#[case(":::tip")]
#[case(":::tip\n")]
#[case("> ")]
#[case("- ")]
#[case("1. ")]
#[case("#")]
#[case("# ")]
#[case("![](")]
#[case("**[*](*)**")]
#[case("\r\n\r\n")]
#[case("🙂 **😀** *🎉* [🔗](🌐)")]
fn parsing_is_total(#[case] source: &str) {
    let doc = parse_document(source);
    snapshot::invariants(source, &doc);
}

#[test]
fn empty_input_is_empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn consecutive_lines_are_separate_paragraphs() {
    assert_eq!(
        segment("line one\nline two"),
        vec![
            Block::Paragraph {
                text: "line one".into()
            },
            Block::Paragraph {
                text: "line two".into()
            },
        ]
    );
}

#[test]
fn heading_prefix_precedence() {
    assert_eq!(
        segment("### H3\n#### not heading"),
        vec![
            Block::Heading {
                level: 3,
                text: "H3".into()
            },
            Block::Paragraph {
                text: "#### not heading".into()
            },
        ]
    );
}

#[test]
fn blockquote_grouping() {
    assert_eq!(
        segment("> a\n> b\n\nrest"),
        vec![
            Block::Blockquote {
                text: "a\nb".into()
            },
            Block::Paragraph {
                text: "rest".into()
            },
        ]
    );
}

#[test]
fn list_grouping_strips_markers() {
    assert_eq!(
        segment("- one\n- two"),
        vec![Block::UnorderedList {
            items: vec!["one".into(), "two".into()]
        }]
    );
    assert_eq!(
        segment("1. first\n2. second"),
        vec![Block::OrderedList {
            items: vec!["first".into(), "second".into()]
        }]
    );
}

#[test]
fn callout_closed_and_unclosed() {
    assert_eq!(
        segment(":::tip\nhelp\n:::"),
        vec![Block::Callout {
            kind: CalloutKind::Tip,
            text: "help".into()
        }]
    );
    assert_eq!(
        segment(":::warning\nhelp"),
        vec![Block::Callout {
            kind: CalloutKind::Warning,
            text: "help".into()
        }]
    );
}

#[test]
fn standalone_image_keeps_only_url() {
    assert_eq!(
        segment("![alt](http://img)"),
        vec![Block::Image {
            url: "http://img".into()
        }]
    );
}

#[test]
fn link_text_stays_literal() {
    let doc = parse_document("[**x**](u)");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph {
            text: RichText::resolve("[**x**](u)")
        }]
    );
    let Block::Paragraph { text } = &doc.blocks()[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(text.runs(), &[InlineRun::link("**x**", "u")]);
}

#[rstest]
#[case("hello world")]
#[case("price: 3 * 4 = 12")]
#[case("see (appendix) and [brackets]")]
#[case("")]
fn text_without_grammar_matches_is_one_plain_run(#[case] raw: &str) {
    assert_eq!(rich(raw).runs(), &[InlineRun::plain(raw)]);
}

#[test]
fn blank_lines_do_not_end_a_callout() {
    let doc = parse_document(":::info\na\n\nb\n:::");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.plain_text(), "a\n\nb");
}

#[test]
fn quote_text_resolves_across_lines() {
    let doc = parse_document("> **a**\n> b");
    let Block::Blockquote { text } = &doc.blocks()[0] else {
        panic!("expected blockquote");
    };
    assert_eq!(
        text.runs(),
        &[InlineRun::bold("a"), InlineRun::plain("\nb")]
    );
}

const END_TO_END: &str = "# Title
Some **bold** and *italic*.

> q1
> q2

- i1
- i2

![alt](http://x)

---

:::tip
hint
:::";

#[test]
fn end_to_end_segmentation() {
    assert_eq!(
        segment(END_TO_END),
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            Block::Paragraph {
                text: "Some **bold** and *italic*.".into()
            },
            Block::Blockquote {
                text: "q1\nq2".into()
            },
            Block::UnorderedList {
                items: vec!["i1".into(), "i2".into()]
            },
            Block::Image {
                url: "http://x".into()
            },
            Block::Divider,
            Block::Callout {
                kind: CalloutKind::Tip,
                text: "hint".into()
            },
        ]
    );
}

#[test]
fn end_to_end_resolution() {
    let doc = parse_document(END_TO_END);
    snapshot::invariants(END_TO_END, &doc);
    assert_eq!(doc.len(), 7);

    let Block::Paragraph { text } = &doc.blocks()[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        text.runs(),
        &[
            InlineRun::plain("Some "),
            InlineRun::bold("bold"),
            InlineRun::plain(" and *italic*."),
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_document(END_TO_END), parse_document(END_TO_END));
}
