use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use crate::{
    ide::lsp::lsp_range_to_ide,
    language::Language,
    text_pos::{LineIndex, Position, TextRange},
};

// ── Document ────────────────────────────────────────────────────────────────

/// Snapshot of a single open text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document URI.
    pub uri: Url,
    /// Language id reported by the client on open.
    pub language_id: String,
    /// Full source text (always kept up-to-date).
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Line start table (rebuilt on every mutation).
    line_index: LineIndex,
}

impl Document {
    pub fn new(
        uri: Url,
        language_id: impl Into<String>,
        text: String,
        version: i32,
    ) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            uri,
            language_id: language_id.into(),
            text,
            version,
            line_index,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    /// Language of the document, from its language id or, failing that, its
    /// file extension.
    pub fn language(&self) -> Option<Language> {
        Language::from_language_id(&self.language_id).or_else(|| {
            let path = self.uri.path();
            let (_, extension) = path.rsplit_once('.')?;
            Language::from_extension(extension)
        })
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Return the full text of a given 0-based line (without the trailing newline).
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let (start, end) = self.line_index.line_span(&self.text, line)?;
        Some(&self.text[start..end])
    }

    /// Convert a position (line/character, 0-based) to a byte offset.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        self.line_index.offset_of(&self.text, pos)
    }

    /// Convert a byte offset to a position.
    pub fn position_of(
        &self,
        offset: usize,
    ) -> Position {
        self.line_index.position_of(&self.text, offset)
    }

    /// Text covered by `range`.
    pub fn text_in(
        &self,
        range: TextRange,
    ) -> Option<&str> {
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end)?;
        self.text.get(start..end.max(start))
    }

    // ── mutations ───────────────────────────────────────────────────────

    /// Apply a list of incremental or full-content changes and bump version.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            if let Some(range) = change.range {
                let range = lsp_range_to_ide(range);
                if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end)) {
                    self.text.replace_range(start..end.max(start), &change.text);
                    self.line_index = LineIndex::new(&self.text);
                }
            } else {
                self.text = change.text;
                self.line_index = LineIndex::new(&self.text);
            }
        }
        self.version = version;
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
