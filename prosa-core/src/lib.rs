//! Paragraph, sentence and token segmentation for plain Unicode prose
//!
//! This crate holds the pure segmentation algorithm. Everything here is
//! synchronous, allocation-light and free of I/O; orchestration (threading,
//! cancellation, document assembly) lives in `prosa-engine`.
//!
//! # Pipeline
//!
//! 1. [`scanner`] decodes UTF-8 and normalizes line breaks and whitespace
//! 2. [`classifier`] maps characters to punctuation classes
//! 3. [`paragraph`] splits the text on blank lines
//! 4. [`sentence`] finds sentence boundaries inside each paragraph
//! 5. [`tokenizer`] splits each sentence into tokens
//!
//! All spans are byte offsets into the original buffer.
//!
//! # Example
//!
//! ```rust
//! use prosa_core::{detect_sentences, SegmenterConfig};
//!
//! let text = "Dr. Smith arrived. He sat down.";
//! let config = SegmenterConfig::default();
//! let sentences = detect_sentences(text, &config);
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].span.slice(text), "Dr. Smith arrived.");
//! ```

pub mod abbreviation;
pub mod classifier;
pub mod config;
pub mod error;
pub mod paragraph;
pub mod quote;
pub mod scanner;
pub mod sentence;
pub mod tokenizer;
pub mod types;

pub use abbreviation::{AbbreviationSet, CollocationSet, StarterSet};
pub use classifier::{classify, DashKind, PunctClass, QuoteMark, QuoteSide, QuoteStyle};
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use error::{CoreError, Result};
pub use paragraph::{segment_paragraph, split_paragraphs, SegmentedParagraph, SegmentedSentence};
pub use scanner::{collapse_whitespace, scan, ScannedChar, Scanner};
pub use sentence::{detect_sentences, SentenceDetector};
pub use tokenizer::{tokenize, Tokenizer};
pub use types::{SentenceSegment, Span, Token, TokenKind};
