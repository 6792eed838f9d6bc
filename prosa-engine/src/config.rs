//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;

/// Default values for engine settings
pub mod defaults {
    /// Documents smaller than this are segmented sequentially in adaptive mode
    pub const PARALLEL_THRESHOLD: usize = 64 * 1024;
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads for parallel execution (None = one per CPU)
    pub threads: Option<usize>,
    /// Minimum document size in bytes before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Always segment on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Always fan paragraphs out to the worker pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Set the worker thread count
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Check the settings before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
