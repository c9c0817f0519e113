use super::{
    classify::{LineClass, MarkupLineClassifier},
    kinds::{BlockQuote, Callout, List},
    types::{Block, CalloutKind, RawBlock},
};

/// A multi-line construct that is still collecting lines.
#[derive(Debug)]
enum OpenRun {
    None,
    Callout { kind: CalloutKind, lines: Vec<String> },
    Quote { lines: Vec<String> },
    Unordered { items: Vec<String> },
    Ordered { items: Vec<String> },
}

/// Line-at-a-time state machine that groups lines into raw blocks.
///
/// Push every line of the document in order, then call [`finish`](Self::finish).
/// A run (callout, quote, list) stays open while following lines continue it;
/// the first line that does not is classified afresh. Runs still open at the
/// end of input are closed implicitly.
pub struct BlockBuilder {
    classifier: MarkupLineClassifier,
    run: OpenRun,
    out: Vec<RawBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkupLineClassifier,
            run: OpenRun::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        if let OpenRun::Callout { lines, .. } = &mut self.run {
            if Callout::closes(line) {
                self.flush_run();
            } else {
                lines.push(line.to_string());
            }
            return;
        }

        if self.continue_run(line) {
            return;
        }
        self.flush_run();

        match self.classifier.classify(line) {
            LineClass::Blank => {}
            LineClass::CalloutOpen(kind) => {
                self.run = OpenRun::Callout {
                    kind,
                    lines: vec![],
                }
            }
            LineClass::Heading { level, text } => self.out.push(Block::Heading {
                level,
                text: text.to_string(),
            }),
            LineClass::Divider => self.out.push(Block::Divider),
            LineClass::Quote(text) => {
                self.run = OpenRun::Quote {
                    lines: vec![text.to_string()],
                }
            }
            LineClass::Image { url, .. } => self.out.push(Block::Image {
                url: url.to_string(),
            }),
            LineClass::UnorderedItem(item) => {
                self.run = OpenRun::Unordered {
                    items: vec![item.to_string()],
                }
            }
            LineClass::OrderedItem(item) => {
                self.run = OpenRun::Ordered {
                    items: vec![item.to_string()],
                }
            }
            LineClass::Text(text) => self.out.push(Block::Paragraph {
                text: text.to_string(),
            }),
        }
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        // EOF closes whatever is open
        self.flush_run();
        self.out
    }

    /// Appends `line` to the open run if it continues it.
    fn continue_run(&mut self, line: &str) -> bool {
        match &mut self.run {
            OpenRun::Quote { lines } => match BlockQuote::strip(line) {
                Some(text) => {
                    lines.push(text.to_string());
                    true
                }
                None => false,
            },
            OpenRun::Unordered { items } => match List::unordered_item(line) {
                Some(item) => {
                    items.push(item.to_string());
                    true
                }
                None => false,
            },
            OpenRun::Ordered { items } => match List::ordered_item(line) {
                Some(item) => {
                    items.push(item.to_string());
                    true
                }
                None => false,
            },
            OpenRun::None | OpenRun::Callout { .. } => false,
        }
    }

    fn flush_run(&mut self) {
        let block = match std::mem::replace(&mut self.run, OpenRun::None) {
            OpenRun::None => return,
            OpenRun::Callout { kind, lines } => Block::Callout {
                kind,
                text: lines.join("\n"),
            },
            OpenRun::Quote { lines } => Block::Blockquote {
                text: lines.join("\n"),
            },
            OpenRun::Unordered { items } => Block::UnorderedList { items },
            OpenRun::Ordered { items } => Block::OrderedList { items },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `source` on `\n` and segments it into raw blocks.
///
/// Total over all input: the empty string yields no blocks and malformed
/// markup degrades to paragraphs.
pub fn segment(source: &str) -> Vec<RawBlock> {
    let mut builder = BlockBuilder::new();
    for line in source.split('\n') {
        builder.push(line);
    }
    builder.finish()
}
