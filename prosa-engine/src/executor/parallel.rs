//! Parallel execution strategy
//!
//! Paragraphs are scattered over a dedicated rayon pool and gathered back
//! by index; `collect` on an indexed parallel iterator keeps source order.

use crate::{
    cancel::CancellationToken,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use prosa_core::{segment_paragraph, SegmentedParagraph, SegmenterConfig, Span};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{trace, warn};

/// Multi-threaded executor backed by its own thread pool
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
}

impl ParallelExecutor {
    /// Build an executor with `threads` workers (None = one per CPU)
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("prosa-worker-{index}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        source: &str,
        paragraphs: &[Span],
        config: &SegmenterConfig,
        cancel: &CancellationToken,
    ) -> Result<Vec<SegmentedParagraph>> {
        let completed = AtomicUsize::new(0);

        self.pool.install(|| {
            paragraphs
                .par_iter()
                .enumerate()
                .map(|(index, span)| {
                    if cancel.is_cancelled() {
                        let done = completed.load(Ordering::Relaxed);
                        warn!(completed = done, total = paragraphs.len(), "segmentation cancelled");
                        return Err(EngineError::Cancelled { completed: done });
                    }

                    let paragraph = segment_paragraph(source, *span, config);
                    trace!(
                        index,
                        start = span.start,
                        end = span.end,
                        sentences = paragraph.sentences.len(),
                        "paragraph segmented"
                    );
                    completed.fetch_add(1, Ordering::Relaxed);
                    Ok(paragraph)
                })
                .collect::<Result<Vec<_>>>()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use prosa_core::split_paragraphs;

    fn sample(paragraphs: usize) -> String {
        (0..paragraphs)
            .map(|i| format!("Paragraph {i} starts here. It has a second sentence."))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn test_matches_sequential() {
        let source = sample(40);
        let config = SegmenterConfig::default();
        let spans = split_paragraphs(&source, &config);
        let cancel = CancellationToken::new();

        let executor = ParallelExecutor::new(Some(4)).unwrap();
        assert_eq!(executor.threads(), 4);

        let parallel = executor.execute(&source, &spans, &config, &cancel).unwrap();
        let sequential = SequentialExecutor
            .execute(&source, &spans, &config, &cancel)
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_cancelled() {
        let source = sample(8);
        let config = SegmenterConfig::default();
        let spans = split_paragraphs(&source, &config);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let executor = ParallelExecutor::new(Some(2)).unwrap();
        let err = executor
            .execute(&source, &spans, &config, &cancel)
            .unwrap_err();
        assert!(matches!(err, EngineError::Cancelled { .. }));
    }
}
