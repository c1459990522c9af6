use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based location in a document. `character` counts UTF-16 code units,
/// the same unit editors use for cursor columns.
///
/// Ordering is line-first, then character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Start/end pair delimiting a construct's full text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub const fn new(
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            start,
            end,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(
        &self,
        position: Position,
    ) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn contains_range(
        &self,
        other: &TextRange,
    ) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }
}

/// Line start table for converting byte offsets into [`Position`]s.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(i + 1);
            }
        }
        Self {
            line_offsets,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Byte offset where `line` begins.
    pub fn line_start(
        &self,
        line: usize,
    ) -> Option<usize> {
        self.line_offsets.get(line).copied()
    }

    /// Byte range of `line`, excluding the trailing `\n` and `\r\n`.
    pub fn line_span(
        &self,
        text: &str,
        line: usize,
    ) -> Option<(usize, usize)> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).map(|next| next - 1).unwrap_or(text.len());
        let end = if end > start && text.as_bytes().get(end - 1) == Some(&b'\r') { end - 1 } else { end };
        Some((start, end))
    }

    /// Convert a byte offset into a position. Offsets past the end clamp to
    /// the end of the text.
    pub fn position_of(
        &self,
        text: &str,
        offset: usize,
    ) -> Position {
        let offset = offset.min(text.len());
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_offsets[line];
        let character = utf16_len(&text[line_start..offset]);
        Position::new(line as u32, character)
    }

    /// Convert a position into a byte offset. Characters past the end of the
    /// line clamp to the line end.
    pub fn offset_of(
        &self,
        text: &str,
        position: Position,
    ) -> Option<usize> {
        let (line_start, line_end) = self.line_span(text, position.line as usize)?;
        let mut utf16_offset: u32 = 0;
        let mut byte_offset = line_start;
        for ch in text[line_start..line_end].chars() {
            if utf16_offset >= position.character {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }
        Some(byte_offset)
    }

    /// Position just past the last character of `line`.
    pub fn line_end_position(
        &self,
        text: &str,
        line: usize,
    ) -> Option<Position> {
        let (start, end) = self.line_span(text, line)?;
        Some(Position::new(line as u32, utf16_len(&text[start..end])))
    }
}

pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
