//! Document assembly
//!
//! Flattens per-paragraph results into the arenas of a [`Document`].
//! Results must arrive in paragraph order; every executor guarantees that.

use crate::document::{Document, ParagraphNode, SentenceNode};
use prosa_core::SegmentedParagraph;

/// Builds a [`Document`] from executor output
#[derive(Debug, Default)]
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self
    }

    /// Move paragraph results into a document owning `source`
    pub fn assemble(&self, source: String, paragraphs: Vec<SegmentedParagraph>) -> Document {
        let sentence_total: usize = paragraphs.iter().map(|p| p.sentences.len()).sum();
        let token_total: usize = paragraphs.iter().map(SegmentedParagraph::token_count).sum();

        let mut paragraph_nodes = Vec::with_capacity(paragraphs.len());
        let mut sentence_nodes = Vec::with_capacity(sentence_total);
        let mut tokens = Vec::with_capacity(token_total);

        for paragraph in paragraphs {
            let first_sentence = sentence_nodes.len();
            for sentence in paragraph.sentences {
                debug_assert!(paragraph.span.contains(&sentence.segment.span));
                let first_token = tokens.len();
                tokens.extend(sentence.tokens);
                sentence_nodes.push(SentenceNode {
                    span: sentence.segment.span,
                    is_quoted: sentence.segment.is_quoted,
                    tokens: first_token..tokens.len(),
                });
            }
            paragraph_nodes.push(ParagraphNode {
                span: paragraph.span,
                sentences: first_sentence..sentence_nodes.len(),
            });
        }

        Document {
            source,
            paragraphs: paragraph_nodes,
            sentences: sentence_nodes,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosa_core::{segment_paragraph, split_paragraphs, SegmenterConfig};

    #[test]
    fn test_index_ranges_are_contiguous() {
        let source = "A b. C d.\n\nE f.";
        let config = SegmenterConfig::default();
        let paragraphs = split_paragraphs(source, &config)
            .into_iter()
            .map(|span| segment_paragraph(source, span, &config))
            .collect();

        let doc = DocumentAssembler::new().assemble(source.to_string(), paragraphs);

        assert_eq!(doc.paragraphs[0].sentences, 0..2);
        assert_eq!(doc.paragraphs[1].sentences, 2..3);
        assert_eq!(doc.sentences[1].tokens, 3..6);
        assert_eq!(doc.sentences[2].tokens, 6..9);
    }
}
