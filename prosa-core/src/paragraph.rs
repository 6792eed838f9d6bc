//! Paragraph splitting and per-paragraph segmentation
//!
//! The source buffer is split into paragraphs before any sentence detection
//! runs. A paragraph is a maximal run of non-blank lines; a line holding only
//! whitespace is blank. With `paragraph_on_indent` enabled, a line indented by
//! a tab or two or more spaces also opens a new paragraph.
//!
//! Each paragraph is then segmented on its own, so sentence detection never
//! crosses a paragraph boundary.

use crate::config::SegmenterConfig;
use crate::scanner::Scanner;
use crate::sentence::SentenceDetector;
use crate::tokenizer::Tokenizer;
use crate::types::{SentenceSegment, Span, Token};

/// Minimum leading width (tab counts as two) that marks an indented line
const INDENT_WIDTH: usize = 2;

/// A sentence together with its tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedSentence {
    /// Sentence span (absolute) and quotation flag
    pub segment: SentenceSegment,
    /// Tokens with absolute spans
    pub tokens: Vec<Token>,
}

/// A paragraph with its sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedParagraph {
    /// Absolute paragraph span, without surrounding whitespace
    pub span: Span,
    /// Sentences in source order
    pub sentences: Vec<SegmentedSentence>,
}

impl SegmentedParagraph {
    /// Number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }
}

/// Split `text` into paragraph spans.
///
/// Returns no spans for empty or whitespace-only text, and a single span
/// when the text has no blank lines.
pub fn split_paragraphs(text: &str, config: &SegmenterConfig) -> Vec<Span> {
    let mut paragraphs = Vec::new();
    let mut current: Option<Span> = None;
    let mut line_has_content = false;
    let mut indent = 0;

    for scanned in Scanner::new(text) {
        if scanned.is_newline() {
            if !line_has_content {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
            }
            line_has_content = false;
            indent = 0;
            continue;
        }

        if scanned.is_whitespace() {
            if !line_has_content {
                indent += if text[scanned.offset..].starts_with('\t') {
                    INDENT_WIDTH
                } else {
                    1
                };
            }
            continue;
        }

        if !line_has_content {
            line_has_content = true;
            if config.paragraph_on_indent && indent >= INDENT_WIDTH {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
            }
        }

        match current.as_mut() {
            Some(paragraph) => paragraph.end = scanned.end(),
            None => current = Some(Span::new(scanned.offset, scanned.end())),
        }
    }

    if let Some(paragraph) = current {
        paragraphs.push(paragraph);
    }
    paragraphs
}

/// Detect sentences and tokens inside one paragraph of `source`.
pub fn segment_paragraph(
    source: &str,
    span: Span,
    config: &SegmenterConfig,
) -> SegmentedParagraph {
    let text = span.slice(source);
    let tokenizer = Tokenizer::new();

    let sentences = SentenceDetector::new(config)
        .detect(text)
        .into_iter()
        .map(|segment| {
            let absolute = segment.span.offset(span.start);
            SegmentedSentence {
                segment: SentenceSegment {
                    span: absolute,
                    is_quoted: segment.is_quoted,
                },
                tokens: tokenizer.tokenize(absolute.slice(source), absolute.start),
            }
        })
        .collect();

    SegmentedParagraph { span, sentences }
}
