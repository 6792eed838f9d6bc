//! Codepoint scanner with position tracking
//!
//! The scanner is an explicit cursor over a borrowed `&str`. It yields one
//! [`ScannedChar`] per Unicode scalar value, carrying the byte offset of the
//! scalar in the original buffer. Line endings are normalised on the fly:
//! `\r\n` is reported once as `'\n'` spanning two bytes, a lone `\r` (and the
//! Unicode line/paragraph separators) as `'\n'`. Every other whitespace
//! character is reported as `' '`. The buffer itself is never modified, so
//! offsets always point at the original bytes.
//!
//! Restarting is re-invocation: build a new scanner or [`Scanner::seek`] back.

use crate::error::{CoreError, Result};
use unicode_segmentation::UnicodeSegmentation;

/// A normalised scalar value and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedChar {
    /// Normalised character (`'\n'` for line breaks, `' '` for other whitespace)
    pub ch: char,
    /// Byte offset of the original sequence
    pub offset: usize,
    /// Byte length of the original sequence (2 for `\r\n`)
    pub len: usize,
}

impl ScannedChar {
    /// Offset one past the original sequence
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Whether this is normalised whitespace
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.ch == ' ' || self.ch == '\n'
    }

    /// Whether this is a normalised line break
    #[inline]
    pub fn is_newline(&self) -> bool {
        self.ch == '\n'
    }
}

/// Cursor over a UTF-8 buffer.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

/// Validate `buffer` as UTF-8 and return a scanner positioned at its start.
///
/// Fails with [`CoreError::Encoding`] carrying the offset of the first
/// invalid byte sequence.
pub fn scan(buffer: &[u8]) -> Result<Scanner<'_>> {
    Scanner::from_bytes(buffer)
}

impl<'a> Scanner<'a> {
    /// Create a scanner over already-validated text
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Validate raw bytes and create a scanner over them
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(CoreError::from)?;
        Ok(Self::new(text))
    }

    /// The buffer being scanned
    #[inline]
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Current byte offset
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has consumed the whole buffer
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Look at the next character without consuming it
    #[inline]
    pub fn peek(&self) -> Option<ScannedChar> {
        self.decode_at(self.pos)
    }

    /// Move the cursor to `pos`.
    ///
    /// Positions inside a multi-byte sequence are moved back to the start of
    /// that sequence; positions past the end are clamped.
    pub fn seek(&mut self, pos: usize) {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Collect the remaining characters into an indexable buffer
    pub fn collect_chars(self) -> Vec<ScannedChar> {
        let mut chars = Vec::with_capacity(self.text.len() - self.pos);
        chars.extend(self);
        chars
    }

    fn decode_at(&self, pos: usize) -> Option<ScannedChar> {
        let raw = self.text[pos..].chars().next()?;
        let (ch, len) = match raw {
            '\r' if self.text.as_bytes().get(pos + 1) == Some(&b'\n') => ('\n', 2),
            '\r' | '\n' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                ('\n', raw.len_utf8())
            }
            c if c.is_whitespace() => (' ', c.len_utf8()),
            c => (c, c.len_utf8()),
        };
        Some(ScannedChar {
            ch,
            offset: pos,
            len,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = ScannedChar;

    fn next(&mut self) -> Option<Self::Item> {
        let scanned = self.decode_at(self.pos)?;
        self.pos = scanned.end();
        Some(scanned)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

/// Flag the characters of `chars` that continue the extended grapheme
/// cluster opened by an earlier character (combining marks, joiners,
/// variation selectors).
///
/// `chars` must come from scanning `text` from its start.
pub fn cluster_continuations(text: &str, chars: &[ScannedChar]) -> Vec<bool> {
    let mut starts = text.grapheme_indices(true).map(|(offset, _)| offset).peekable();
    chars
        .iter()
        .map(|c| {
            while starts.next_if(|&start| start < c.offset).is_some() {}
            starts.peek() != Some(&c.offset)
        })
        .collect()
}

/// Collapse every whitespace run in `text` to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for scanned in Scanner::new(text) {
        if scanned.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(scanned.ch);
    }
    out
}
