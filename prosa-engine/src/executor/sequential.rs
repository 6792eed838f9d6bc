//! Sequential execution strategy

use crate::{
    cancel::CancellationToken,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use prosa_core::{segment_paragraph, SegmentedParagraph, SegmenterConfig, Span};
use tracing::{trace, warn};

/// Single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        source: &str,
        paragraphs: &[Span],
        config: &SegmenterConfig,
        cancel: &CancellationToken,
    ) -> Result<Vec<SegmentedParagraph>> {
        let mut results = Vec::with_capacity(paragraphs.len());

        for (index, span) in paragraphs.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(completed = index, total = paragraphs.len(), "segmentation cancelled");
                return Err(EngineError::Cancelled { completed: index });
            }

            let paragraph = segment_paragraph(source, *span, config);
            trace!(
                index,
                start = span.start,
                end = span.end,
                sentences = paragraph.sentences.len(),
                "paragraph segmented"
            );
            results.push(paragraph);
        }

        Ok(results)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
