use super::{kinds::SpanFamily, types::InlineRun};

/// One recognizer hit over the input, before overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanMatch<'a> {
    start: usize,
    end: usize,
    family: SpanFamily,
    text: &'a str,
    url: &'a str,
}

impl SpanMatch<'_> {
    fn into_run(self) -> InlineRun {
        match self.family {
            SpanFamily::Link => InlineRun::link(self.text, self.url),
            SpanFamily::Bold => InlineRun::bold(self.text),
            SpanFamily::Italic => InlineRun::italic(self.text),
        }
    }
}

/// Resolves a raw text field into [`InlineRun`]s.
///
/// Each family scans the whole string on its own, so hits from different
/// families may overlap. Hits are ordered by start offset with family priority
/// breaking ties, then kept greedily: a hit survives only if it starts at or
/// after the end of the last kept one. Nothing inside a kept hit is looked at
/// again, which is why link text stays literal.
///
/// # Returns
/// Runs covering the input left to right. Text outside kept hits becomes
/// `PlainText`; input without hits (including `""`) is one `PlainText`.
pub fn resolve_inline(s: &str) -> Vec<InlineRun> {
    let kept = select_non_overlapping(collect_matches(s));

    if kept.is_empty() {
        return vec![InlineRun::plain(s)];
    }

    let mut out = Vec::with_capacity(kept.len() * 2 + 1);
    let mut pos = 0;
    for m in kept {
        if m.start > pos {
            out.push(InlineRun::plain(&s[pos..m.start]));
        }
        pos = m.end;
        out.push(m.into_run());
    }
    if pos < s.len() {
        out.push(InlineRun::plain(&s[pos..]));
    }
    out
}

/// All hits of every family, in family priority order.
fn collect_matches(s: &str) -> Vec<SpanMatch<'_>> {
    let mut matches = vec![];
    for family in SpanFamily::PRIORITY {
        for caps in family.pattern().captures_iter(s) {
            let (Some(full), Some(text)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            matches.push(SpanMatch {
                start: full.start(),
                end: full.end(),
                family,
                text: text.as_str(),
                url: caps.get(2).map_or("", |m| m.as_str()),
            });
        }
    }
    matches
}

/// Orders hits by `(start, family)` and keeps the non-overlapping ones.
fn select_non_overlapping(mut matches: Vec<SpanMatch<'_>>) -> Vec<SpanMatch<'_>> {
    // Within one family starts are unique, so this key is a total order.
    matches.sort_by_key(|m| (m.start, m.family));

    let mut kept: Vec<SpanMatch<'_>> = Vec::with_capacity(matches.len());
    for m in matches {
        if kept.last().is_none_or(|last| m.start >= last.end) {
            kept.push(m);
        }
    }
    kept
}
