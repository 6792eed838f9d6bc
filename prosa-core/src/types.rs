//! Span and token types shared by every layer
//!
//! All positions are byte offsets into the immutable source buffer. Nothing
//! here owns text: a span is resolved against the buffer it was produced
//! from.

use std::ops::Range;

/// Half-open byte range `[start, end)` into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both ends by `offset`
    #[inline]
    pub const fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Whether `other` lies entirely within this span
    #[inline]
    pub const fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice `source` with this span
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Shrink the span so it neither starts nor ends with whitespace.
    ///
    /// Returns an empty span positioned at `end` when the covered text is
    /// all whitespace.
    pub fn trim(self, source: &str) -> Self {
        let text = self.slice(source);
        let trimmed_start = text.trim_start();
        if trimmed_start.is_empty() {
            return Self::new(self.end, self.end);
        }
        let start = self.start + (text.len() - trimmed_start.len());
        let end = start + trimmed_start.trim_end().len();
        Self::new(start, end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Maximal run of letters
    Word,
    /// Digit run with at most one internal `,` or `.`
    Number,
    /// A single punctuation mark or symbol, or one ellipsis
    Punctuation,
    /// Letters joined by an apostrophe ("don't", "waiter's")
    Contraction,
    /// Letters joined by a hyphen or en dash ("second-choice")
    Hyphenated,
}

impl TokenKind {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Contraction => "contraction",
            TokenKind::Hyphenated => "hyphenated",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token: a span plus its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Byte span in the source buffer
    pub span: Span,
    /// Token kind
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    #[inline]
    pub const fn new(span: Span, kind: TokenKind) -> Self {
        Self { span, kind }
    }

    /// Resolve the token text against its source buffer
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

/// One sentence produced by the boundary detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSegment {
    /// Span of the sentence content, without surrounding whitespace
    pub span: Span,
    /// Whether the sentence opens inside a direct-speech quotation
    pub is_quoted: bool,
}
