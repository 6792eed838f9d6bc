//! Engine-level errors

use prosa_core::CoreError;
use thiserror::Error;

/// Errors raised while orchestrating a segmentation run
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Cancellation was observed between paragraphs
    #[error("segmentation cancelled after {completed} paragraphs")]
    Cancelled {
        /// Paragraphs finished before cancellation was noticed
        completed: usize,
    },

    /// The worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Invalid engine settings
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
