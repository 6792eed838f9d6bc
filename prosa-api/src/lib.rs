//! Public API for prosa document segmentation
//!
//! Turns plain Unicode prose into a [`Document`] of paragraphs, sentences
//! and tokens. All spans are byte offsets into the source, which the
//! document owns.
//!
//! # Example
//!
//! ```rust
//! use prosa_api::{segment, Options};
//!
//! let doc = segment("She said, \"Stop.\" He left.".as_bytes(), &Options::default()).unwrap();
//!
//! let sentences: Vec<_> = doc.sentences().map(|s| s.text()).collect();
//! assert_eq!(sentences, ["She said, \"Stop.\"", "He left."]);
//! ```

#![warn(missing_docs)]

pub mod dto;
pub mod error;
pub mod options;

use tracing::debug;

// Re-export key types
pub use dto::{DocumentDto, ParagraphDto, SentenceDto, TokenDto};
pub use error::{ApiError, Result};
pub use options::{Mode, Options, OptionsBuilder};
pub use prosa_core::{Span, TokenKind};
pub use prosa_engine::{CancellationToken, Document, Paragraph, Sentence, TokenRef};

/// Segment a UTF-8 buffer into a [`Document`].
///
/// Fails with [`ApiError::Encoding`] on invalid UTF-8 and with
/// [`ApiError::Configuration`] on invalid options; otherwise always
/// produces a document covering the whole input.
pub fn segment(text: &[u8], options: &Options) -> Result<Document> {
    segment_with_cancel(text, options, &CancellationToken::new())
}

/// Like [`segment`], checking `cancel` between paragraphs
pub fn segment_with_cancel(
    text: &[u8],
    options: &Options,
    cancel: &CancellationToken,
) -> Result<Document> {
    DocumentProcessor::new(options)?.segment_with_cancel(text, cancel)
}

/// Render a document as JSON
#[cfg(feature = "serde")]
pub fn to_json(document: &Document, pretty: bool) -> Result<String> {
    let dto = DocumentDto::from(document);
    let json = if pretty {
        serde_json::to_string_pretty(&dto)?
    } else {
        serde_json::to_string(&dto)?
    };
    Ok(json)
}

/// Reusable processor for many documents with the same options.
///
/// Options are validated once and the worker pool, when one is needed, is
/// shared across calls.
#[derive(Debug)]
pub struct DocumentProcessor {
    inner: prosa_engine::Segmenter,
}

impl DocumentProcessor {
    /// Validate `options` and build a processor
    pub fn new(options: &Options) -> Result<Self> {
        let config = options.segmenter_config()?;
        let engine = options.engine_config()?;
        let inner = prosa_engine::Segmenter::with_engine(config, engine)?;
        debug!(
            mode = inner.engine_config().execution_mode.as_str(),
            abbreviations = inner.config().abbreviations().len(),
            quote_lookahead = inner.config().quote_lookahead(),
            "document processor ready"
        );
        Ok(Self { inner })
    }

    /// Segment a UTF-8 buffer
    pub fn segment(&self, text: &[u8]) -> Result<Document> {
        Ok(self.inner.segment(text)?)
    }

    /// Segment a UTF-8 buffer, checking `cancel` between paragraphs
    pub fn segment_with_cancel(&self, text: &[u8], cancel: &CancellationToken) -> Result<Document> {
        Ok(self.inner.segment_with_cancel(text, cancel)?)
    }

    /// Read and segment a UTF-8 file
    pub fn segment_file(&self, path: impl AsRef<std::path::Path>) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        self.segment(&bytes)
    }
}
