//! Orchestration for prosa document segmentation
//!
//! This crate runs the core algorithm over a whole document: it splits the
//! source into paragraphs, segments them sequentially or on a rayon worker
//! pool, honours cooperative cancellation between paragraphs and assembles
//! the results into an arena-backed [`Document`].
//!
//! # Example
//!
//! ```rust
//! use prosa_engine::{Segmenter, SegmenterConfig};
//!
//! let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
//! let doc = segmenter.segment_str("It rained. We stayed in.\n\nThe end.").unwrap();
//!
//! assert_eq!(doc.paragraph_count(), 2);
//! assert_eq!(doc.sentence_count(), 3);
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod cancel;
pub mod config;
pub mod document;
pub mod error;
pub mod executor;
pub mod processor;

pub use assembler::DocumentAssembler;
pub use cancel::CancellationToken;
pub use config::EngineConfig;
pub use document::{Document, Paragraph, Sentence, TokenRef};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use processor::Segmenter;

// Re-export from core for convenience
pub use prosa_core::{CoreError, SegmenterConfig, SegmenterConfigBuilder, Span, Token, TokenKind};
