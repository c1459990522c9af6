//! Blank out comments and literal contents so the outline scanners only see
//! code. Byte offsets and line breaks are preserved, which keeps a single
//! [`LineIndex`](crate::text_pos::LineIndex) valid for both the original and
//! the masked text. String delimiters stay in place so a line holding only a
//! docstring is still recognised as content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MaskStyle {
    /// `#` comments, single/double and triple-quoted strings.
    Python,
    /// `//` and `/* */` comments, string/char literals, Java text blocks,
    /// C++ raw strings and preprocessor lines.
    CFamily,
}

#[derive(Debug, Clone)]
pub(crate) struct MaskedSource {
    pub(crate) text: String,
    /// One flag per line, set when the line begins inside a multi-line
    /// literal or comment.
    pub(crate) starts_in_literal: Vec<bool>,
}

pub(crate) fn mask_source(
    text: &str,
    style: MaskStyle,
) -> MaskedSource {
    let bytes = text.as_bytes();
    let mut masker = Masker {
        bytes,
        out: bytes.to_vec(),
        starts_in_literal: vec![false],
    };

    let mut i = 0;
    let mut at_line_start = true;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            masker.starts_in_literal.push(false);
            at_line_start = true;
            i += 1;
            continue;
        }

        let next = match style {
            MaskStyle::Python => masker.python_token(i),
            MaskStyle::CFamily => masker.c_family_token(i, at_line_start),
        };

        if !matches!(b, b' ' | b'\t' | b'\r') {
            at_line_start = false;
        }
        i = next.unwrap_or(i + 1);
    }

    let text = match String::from_utf8(masker.out) {
        Ok(text) => text,
        Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
    };
    MaskedSource {
        text,
        starts_in_literal: masker.starts_in_literal,
    }
}

struct Masker<'a> {
    bytes: &'a [u8],
    out: Vec<u8>,
    starts_in_literal: Vec<bool>,
}

impl Masker<'_> {
    /// Returns the index after the token starting at `i`, or `None` when
    /// the byte at `i` is plain code.
    fn python_token(
        &mut self,
        i: usize,
    ) -> Option<usize> {
        match self.bytes[i] {
            b'#' => {
                let end = self.line_end(i);
                self.blank(i, end);
                Some(end)
            },
            quote @ (b'\'' | b'"') => Some(self.quoted(i, quote, true)),
            _ => None,
        }
    }

    fn c_family_token(
        &mut self,
        i: usize,
        at_line_start: bool,
    ) -> Option<usize> {
        let bytes = self.bytes;
        match bytes[i] {
            b'#' if at_line_start => {
                let end = self.preprocessor_end(i);
                self.blank(i, end);
                Some(end)
            },
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = self.line_end(i);
                self.blank(i, end);
                Some(end)
            },
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = find_from(bytes, i + 2, b"*/").map(|idx| idx + 2).unwrap_or(bytes.len());
                self.blank(i, end);
                Some(end)
            },
            b'"' if i > 0 && bytes[i - 1] == b'R' => Some(self.raw_string(i)),
            b'"' => Some(self.quoted(i, b'"', true)),
            // C++14 digit separator: 1'000'000
            b'\'' if i > 0 && bytes[i - 1].is_ascii_digit() => None,
            b'\'' => Some(self.quoted(i, b'\'', false)),
            _ => None,
        }
    }

    /// Mask a quoted literal starting at `start`, keeping the delimiters.
    fn quoted(
        &mut self,
        start: usize,
        quote: u8,
        allow_triple: bool,
    ) -> usize {
        let bytes = self.bytes;
        let triple = allow_triple && bytes.get(start + 1) == Some(&quote) && bytes.get(start + 2) == Some(&quote);

        if triple {
            let body_start = start + 3;
            let mut j = body_start;
            while j < bytes.len() {
                if bytes[j] == b'\\' {
                    j += 2;
                    continue;
                }
                if bytes[j] == quote && bytes.get(j + 1) == Some(&quote) && bytes.get(j + 2) == Some(&quote) {
                    self.blank(body_start, j);
                    return j + 3;
                }
                j += 1;
            }
            self.blank(body_start, bytes.len());
            return bytes.len();
        }

        let body_start = start + 1;
        let mut j = body_start;
        while j < bytes.len() {
            match bytes[j] {
                b'\\' => j += 2,
                b'\n' => break,
                b if b == quote => {
                    self.blank(body_start, j);
                    return j + 1;
                },
                _ => j += 1,
            }
        }
        // Unterminated: stop at the end of the line.
        let end = j.min(bytes.len());
        self.blank(body_start, end);
        end
    }

    /// `R"delim( ... )delim"`
    fn raw_string(
        &mut self,
        start: usize,
    ) -> usize {
        let bytes = self.bytes;
        let Some(open) = bytes[start + 1..].iter().position(|&b| b == b'(' || b == b'\n').map(|p| start + 1 + p) else {
            return self.quoted(start, b'"', false);
        };
        if bytes[open] != b'(' {
            return self.quoted(start, b'"', false);
        }

        let mut closing = Vec::with_capacity(open - start + 1);
        closing.push(b')');
        closing.extend_from_slice(&bytes[start + 1..open]);
        closing.push(b'"');

        match find_from(bytes, open + 1, &closing) {
            Some(idx) => {
                let end = idx + closing.len();
                self.blank(start + 1, end - 1);
                end
            },
            None => {
                self.blank(start + 1, bytes.len());
                bytes.len()
            },
        }
    }

    fn line_end(
        &self,
        from: usize,
    ) -> usize {
        self.bytes[from..].iter().position(|&b| b == b'\n').map(|p| from + p).unwrap_or(self.bytes.len())
    }

    /// Preprocessor directives continue across lines ending in `\`.
    fn preprocessor_end(
        &self,
        from: usize,
    ) -> usize {
        let mut end = self.line_end(from);
        loop {
            let content = &self.bytes[from..end];
            let trimmed = content.strip_suffix(b"\r").unwrap_or(content);
            if trimmed.ends_with(b"\\") && end < self.bytes.len() {
                end = self.line_end(end + 1);
            } else {
                return end;
            }
        }
    }

    /// Replace `[from, to)` with spaces, keeping line breaks.
    fn blank(
        &mut self,
        from: usize,
        to: usize,
    ) {
        let to = to.min(self.out.len());
        for idx in from..to {
            match self.out[idx] {
                b'\n' => self.starts_in_literal.push(true),
                b'\r' => {},
                _ => self.out[idx] = b' ',
            }
        }
    }
}

fn find_from(
    haystack: &[u8],
    from: usize,
    needle: &[u8],
) -> Option<usize> {
    if from >= haystack.len() || needle.is_empty() {
        return None;
    }
    haystack[from..].windows(needle.len()).position(|window| window == needle).map(|p| from + p)
}

#[cfg(test)]
#[path = "../../../tests/src/symbols/scanner/mask_tests.rs"]
mod tests;
