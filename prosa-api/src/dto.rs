//! Data Transfer Objects for API
//!
//! Owned mirrors of the document tree, detached from the source buffer so
//! they can be serialized, sent across threads or stored.

use prosa_core::{Span, TokenKind};
use prosa_engine::{Document, Paragraph, Sentence, TokenRef};

/// Token with its text copied out
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDto {
    /// Byte offsets in the source
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// Token text
    pub text: String,
    /// Token kind (`word`, `number`, `punctuation`, `contraction`, `hyphenated`)
    pub kind: TokenKind,
}

/// Sentence with its tokens
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDto {
    /// Byte offsets in the source
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// Sentence text as it appears in the source
    pub text: String,
    /// Whether the sentence opens inside a quotation
    pub is_quoted: bool,
    /// Tokens in source order
    pub tokens: Vec<TokenDto>,
}

/// Paragraph with its sentences
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphDto {
    /// Byte offsets in the source
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// Sentences in source order
    pub sentences: Vec<SentenceDto>,
}

/// Whole document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentDto {
    /// Paragraphs in source order
    pub paragraphs: Vec<ParagraphDto>,
}

impl DocumentDto {
    /// Number of sentences across all paragraphs
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }
}

impl From<TokenRef<'_>> for TokenDto {
    fn from(token: TokenRef<'_>) -> Self {
        Self {
            span: token.span(),
            text: token.text().to_owned(),
            kind: token.kind(),
        }
    }
}

impl From<Sentence<'_>> for SentenceDto {
    fn from(sentence: Sentence<'_>) -> Self {
        Self {
            span: sentence.span(),
            text: sentence.text().to_owned(),
            is_quoted: sentence.is_quoted(),
            tokens: sentence.tokens().map(TokenDto::from).collect(),
        }
    }
}

impl From<Paragraph<'_>> for ParagraphDto {
    fn from(paragraph: Paragraph<'_>) -> Self {
        Self {
            span: paragraph.span(),
            sentences: paragraph.sentences().map(SentenceDto::from).collect(),
        }
    }
}

impl From<&Document> for DocumentDto {
    fn from(document: &Document) -> Self {
        Self {
            paragraphs: document.paragraphs().map(ParagraphDto::from).collect(),
        }
    }
}
