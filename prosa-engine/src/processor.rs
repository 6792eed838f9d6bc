//! Segmentation entry point
//!
//! [`Segmenter`] ties the pieces together: decode and validate the input,
//! split paragraphs, run them through the chosen executor and assemble the
//! resulting [`Document`]. Segmentation is all-or-nothing; any error means
//! no document is produced.

use crate::{
    assembler::DocumentAssembler,
    cancel::CancellationToken,
    config::EngineConfig,
    document::Document,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use prosa_core::{scan, split_paragraphs, SegmenterConfig};
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Reusable segmenter bound to one configuration
#[derive(Debug)]
pub struct Segmenter {
    config: SegmenterConfig,
    engine: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: OnceLock<ParallelExecutor>,
}

impl Segmenter {
    /// Create a segmenter with default engine settings
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        Self::with_engine(config, EngineConfig::default())
    }

    /// Create a segmenter with explicit engine settings.
    ///
    /// The worker pool is built on the first document that needs it and
    /// reused afterwards.
    pub fn with_engine(config: SegmenterConfig, engine: EngineConfig) -> Result<Self> {
        engine.validate()?;
        Ok(Self {
            config,
            engine,
            #[cfg(feature = "parallel")]
            parallel: OnceLock::new(),
        })
    }

    /// Segmentation settings
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Engine settings
    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Segment a UTF-8 byte buffer
    pub fn segment(&self, bytes: &[u8]) -> Result<Document> {
        self.segment_with_cancel(bytes, &CancellationToken::new())
    }

    /// Segment a string
    pub fn segment_str(&self, text: &str) -> Result<Document> {
        self.segment(text.as_bytes())
    }

    /// Segment a UTF-8 byte buffer, checking `cancel` between paragraphs
    pub fn segment_with_cancel(
        &self,
        bytes: &[u8],
        cancel: &CancellationToken,
    ) -> Result<Document> {
        let text = scan(bytes)?.source();
        let spans = split_paragraphs(text, &self.config);
        let executor = self.select_executor(text.len(), spans.len())?;

        debug!(
            bytes = text.len(),
            paragraphs = spans.len(),
            mode = executor.mode().as_str(),
            "segmentation started"
        );

        let paragraphs = executor.execute(text, &spans, &self.config, cancel)?;
        let document = DocumentAssembler::new().assemble(text.to_owned(), paragraphs);

        debug!(
            paragraphs = document.paragraph_count(),
            sentences = document.sentence_count(),
            tokens = document.token_count(),
            "segmentation finished"
        );
        Ok(document)
    }

    /// The mode that would be used for a document of this shape
    pub fn resolve_mode(&self, text_len: usize, paragraph_count: usize) -> ExecutionMode {
        let mode = match self.engine.execution_mode {
            ExecutionMode::Adaptive => {
                auto_select(text_len, paragraph_count, self.engine.parallel_threshold)
            }
            mode => mode,
        };

        #[cfg(not(feature = "parallel"))]
        let mode = match mode {
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        };

        mode
    }

    fn select_executor(&self, text_len: usize, paragraph_count: usize) -> Result<&dyn Executor> {
        match self.resolve_mode(text_len, paragraph_count) {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Ok(self.parallel_executor()? as &dyn Executor),
            _ => Ok(&SequentialExecutor as &dyn Executor),
        }
    }

    #[cfg(feature = "parallel")]
    fn parallel_executor(&self) -> Result<&ParallelExecutor> {
        if let Some(executor) = self.parallel.get() {
            return Ok(executor);
        }
        // A concurrent caller may win the race; its pool is kept and ours dropped
        let _ = self.parallel.set(ParallelExecutor::new(self.engine.threads)?);
        self.parallel.get().ok_or_else(|| {
            crate::error::EngineError::ThreadPool("worker pool unavailable".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use prosa_core::CoreError;

    #[test]
    fn test_segment_bytes() {
        let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
        let doc = segmenter.segment(b"Hello world. This is a test.").unwrap();
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
        let err = segmenter.segment(b"ok \xFF bad").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::Encoding { position: 3 })
        ));
    }

    #[test]
    fn test_resolve_mode() {
        let sequential =
            Segmenter::with_engine(SegmenterConfig::default(), EngineConfig::sequential())
                .unwrap();
        assert_eq!(sequential.resolve_mode(1 << 30, 100), ExecutionMode::Sequential);

        let adaptive = Segmenter::new(SegmenterConfig::default()).unwrap();
        assert_eq!(adaptive.resolve_mode(10, 100), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(adaptive.resolve_mode(1 << 20, 100), ExecutionMode::Parallel);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let engine = EngineConfig::parallel().with_threads(Some(0));
        let err = Segmenter::with_engine(SegmenterConfig::default(), engine).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
