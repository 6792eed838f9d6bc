//! Execution strategies for paragraph segmentation
//!
//! Paragraphs are independent once the source is split, so every executor
//! maps `segment_paragraph` over the paragraph spans and returns the results
//! in paragraph order.

use crate::cancel::CancellationToken;
use crate::error::Result;
use prosa_core::{SegmentedParagraph, SegmenterConfig, Span};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded, on the calling thread
    Sequential,
    /// Paragraphs fanned out to a worker pool
    Parallel,
    /// Pick per document from its size and paragraph count
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name used in logs and option files
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Segment every paragraph of `source`, preserving paragraph order.
    ///
    /// `cancel` is checked before each paragraph starts.
    fn execute(
        &self,
        source: &str,
        paragraphs: &[Span],
        config: &SegmenterConfig,
        cancel: &CancellationToken,
    ) -> Result<Vec<SegmentedParagraph>>;

    /// The mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Choose a concrete mode for a document of `text_len` bytes.
///
/// Never returns [`ExecutionMode::Adaptive`].
pub fn auto_select(text_len: usize, paragraph_count: usize, threshold: usize) -> ExecutionMode {
    if paragraph_count < 2 || text_len < threshold {
        // One paragraph cannot be split further; small texts are faster inline
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(500, 10, 1024), ExecutionMode::Sequential);
        assert_eq!(auto_select(1 << 20, 1, 1024), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(1 << 20, 10, 1024), ExecutionMode::Parallel);
        #[cfg(not(feature = "parallel"))]
        assert_eq!(auto_select(1 << 20, 10, 1024), ExecutionMode::Sequential);
    }
}
