//! Segmented document model
//!
//! A [`Document`] owns the decoded source text and three flat arenas: one
//! for paragraphs, one for sentences and one for tokens. Parent nodes refer
//! to their children through index ranges into the next arena, so the
//! whole tree is four allocations no matter how large the document is.
//!
//! The public surface is a set of borrowed views ([`Paragraph`],
//! [`Sentence`], [`TokenRef`]) that resolve spans against the source and
//! hand out `&str` slices of it.

use prosa_core::{collapse_whitespace, Span, Token, TokenKind};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParagraphNode {
    pub(crate) span: Span,
    pub(crate) sentences: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SentenceNode {
    pub(crate) span: Span,
    pub(crate) is_quoted: bool,
    pub(crate) tokens: Range<usize>,
}

/// An immutable, fully segmented document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) source: String,
    pub(crate) paragraphs: Vec<ParagraphNode>,
    pub(crate) sentences: Vec<SentenceNode>,
    pub(crate) tokens: Vec<Token>,
}

impl Document {
    /// The decoded source text every span points into
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the document has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Number of paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of sentences across all paragraphs
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Paragraph at `index`
    pub fn paragraph(&self, index: usize) -> Option<Paragraph<'_>> {
        (index < self.paragraphs.len()).then_some(Paragraph { doc: self, index })
    }

    /// Paragraphs in source order
    pub fn paragraphs(&self) -> impl ExactSizeIterator<Item = Paragraph<'_>> + '_ {
        (0..self.paragraphs.len()).map(move |index| Paragraph { doc: self, index })
    }

    /// Every sentence in source order, ignoring paragraph structure
    pub fn sentences(&self) -> impl ExactSizeIterator<Item = Sentence<'_>> + '_ {
        (0..self.sentences.len()).map(move |index| Sentence { doc: self, index })
    }

    /// Every token in source order
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = TokenRef<'_>> + '_ {
        self.tokens.iter().map(move |token| TokenRef { doc: self, token })
    }

    /// Rebuild the text from its segments with normalized whitespace.
    ///
    /// Paragraphs are separated by one blank line. Sentences and the tokens
    /// inside them get exactly one space wherever the source had any
    /// whitespace between them; adjacent ones stay adjacent, so quote marks
    /// resolve the same way when the output is segmented again.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.source.len());

        for (p, paragraph) in self.paragraphs().enumerate() {
            if p > 0 {
                out.push_str("\n\n");
            }
            let mut previous_end: Option<usize> = None;
            for sentence in paragraph.sentences() {
                let span = sentence.span();
                if previous_end.is_some_and(|end| end < span.start) {
                    out.push(' ');
                }
                sentence.write_normalized(&mut out);
                previous_end = Some(span.end);
            }
        }

        out
    }
}

/// Borrowed view of one paragraph
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Paragraph<'a> {
    fn node(&self) -> &'a ParagraphNode {
        &self.doc.paragraphs[self.index]
    }

    /// Position among the document's paragraphs
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte span in the source
    pub fn span(&self) -> Span {
        self.node().span
    }

    /// Paragraph text, without surrounding blank lines
    pub fn text(&self) -> &'a str {
        self.node().span.slice(&self.doc.source)
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.node().sentences.len()
    }

    /// Sentences in source order
    pub fn sentences(&self) -> impl ExactSizeIterator<Item = Sentence<'a>> + 'a {
        let doc = self.doc;
        self.node()
            .sentences
            .clone()
            .map(move |index| Sentence { doc, index })
    }
}

/// Borrowed view of one sentence
#[derive(Debug, Clone, Copy)]
pub struct Sentence<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Sentence<'a> {
    fn node(&self) -> &'a SentenceNode {
        &self.doc.sentences[self.index]
    }

    /// Byte span in the source
    pub fn span(&self) -> Span {
        self.node().span
    }

    /// Sentence text as it appears in the source
    pub fn text(&self) -> &'a str {
        self.node().span.slice(&self.doc.source)
    }

    /// Whether the sentence opens inside a direct-speech quotation
    pub fn is_quoted(&self) -> bool {
        self.node().is_quoted
    }

    /// Number of tokens
    pub fn token_count(&self) -> usize {
        self.node().tokens.len()
    }

    /// Tokens in source order
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = TokenRef<'a>> + 'a {
        let doc = self.doc;
        doc.tokens[self.node().tokens.clone()]
            .iter()
            .map(move |token| TokenRef { doc, token })
    }

    fn write_normalized(&self, out: &mut String) {
        out.push_str(&collapse_whitespace(self.text()));
    }
}

/// Borrowed view of one token
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    doc: &'a Document,
    token: &'a Token,
}

impl<'a> TokenRef<'a> {
    /// Token text, borrowed from the source
    pub fn text(&self) -> &'a str {
        self.token.text(&self.doc.source)
    }

    /// Token kind
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Byte span in the source
    pub fn span(&self) -> Span {
        self.token.span
    }

    /// The underlying token value
    pub fn token(&self) -> Token {
        *self.token
    }
}

#[cfg(test)]
mod tests {
    use crate::assembler::DocumentAssembler;
    use crate::cancel::CancellationToken;
    use crate::executor::{Executor, SequentialExecutor};
    use prosa_core::{split_paragraphs, SegmenterConfig, TokenKind};

    use super::Document;

    fn build(source: &str) -> Document {
        let config = SegmenterConfig::default();
        let spans = split_paragraphs(source, &config);
        let paragraphs = SequentialExecutor
            .execute(source, &spans, &config, &CancellationToken::new())
            .unwrap();
        DocumentAssembler::new().assemble(source.to_string(), paragraphs)
    }

    #[test]
    fn test_counts_and_views() {
        let doc = build("It rained.  We stayed in.\n\nThe end.");

        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.sentence_count(), 3);
        assert_eq!(doc.token_count(), 10);

        let first = doc.paragraph(0).unwrap();
        assert_eq!(first.text(), "It rained.  We stayed in.");
        let texts: Vec<_> = first.sentences().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["It rained.", "We stayed in."]);

        let last = doc.sentences().last().unwrap();
        assert_eq!(last.text(), "The end.");
        let kinds: Vec<_> = last.tokens().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Punctuation]
        );
        assert!(doc.paragraph(2).is_none());
    }

    #[test]
    fn test_plain_text_normalizes_whitespace() {
        let doc = build("  It   rained.\nWe stayed\tin.\n\n\n\nThe end.  ");
        assert_eq!(doc.to_plain_text(), "It rained. We stayed in.\n\nThe end.");
    }

    #[test]
    fn test_plain_text_keeps_adjacent_tokens() {
        let doc = build("Well—I don't know (really).");
        assert_eq!(doc.to_plain_text(), "Well—I don't know (really).");
    }

    #[test]
    fn test_plain_text_keeps_adjacent_sentences() {
        let text = "Hi.\"Yes. No.\" Ok.";
        let doc = build(text);
        assert_eq!(doc.to_plain_text(), text);

        let again = build(&doc.to_plain_text());
        let flags = |d: &Document| d.sentences().map(|s| s.is_quoted()).collect::<Vec<_>>();
        assert_eq!(again.sentence_count(), doc.sentence_count());
        assert_eq!(flags(&again), flags(&doc));
    }

    #[test]
    fn test_empty_document() {
        let doc = build(" \n\n ");
        assert!(doc.is_empty());
        assert_eq!(doc.sentence_count(), 0);
        assert_eq!(doc.to_plain_text(), "");
    }
}
