use std::sync::Arc;

use crate::document::Document;

/// Memoizes the most recent parse, keyed on the exact source content.
///
/// Render paths that rebuild on every frame can ask for the document
/// repeatedly; only a change in content triggers a new parse.
#[derive(Debug, Default)]
pub struct DocumentCache {
    last: Option<(String, Arc<Document>)>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document for `source`, parsing only if it differs from the
    /// previously seen content.
    pub fn get_or_parse(&mut self, source: &str) -> Arc<Document> {
        if let Some((cached, doc)) = &self.last
            && cached == source
        {
            log::trace!("document cache hit ({} bytes)", source.len());
            return Arc::clone(doc);
        }

        log::debug!("document cache miss, parsing {} bytes", source.len());
        let doc = Arc::new(Document::parse(source));
        self.last = Some((source.to_string(), Arc::clone(&doc)));
        doc
    }

    /// Drops the cached document.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
