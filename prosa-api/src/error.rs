//! API error types

use prosa_core::CoreError;
use prosa_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input is not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    Encoding {
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// Options were rejected before segmentation started
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Segmentation was cancelled; no document was produced
    #[error("segmentation cancelled after {completed} paragraphs")]
    Cancelled {
        /// Paragraphs finished before cancellation was noticed
        completed: usize,
    },

    /// Engine failure unrelated to the input
    #[error("engine error: {0}")]
    Engine(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Option file could not be parsed
    #[cfg(feature = "serde")]
    #[error("invalid options file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Encoding { position } => ApiError::Encoding { position },
            CoreError::Configuration(message) => ApiError::Configuration(message),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Core(core) => core.into(),
            EngineError::Cancelled { completed } => ApiError::Cancelled { completed },
            EngineError::Config(message) => ApiError::Configuration(message),
            other @ EngineError::ThreadPool(_) => ApiError::Engine(other.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_flatten() {
        let err: ApiError = EngineError::Core(CoreError::Encoding { position: 4 }).into();
        assert!(matches!(err, ApiError::Encoding { position: 4 }));

        let err: ApiError = EngineError::Cancelled { completed: 2 }.into();
        assert!(matches!(err, ApiError::Cancelled { completed: 2 }));

        let err: ApiError = EngineError::Config("bad".into()).into();
        assert_eq!(err.to_string(), "configuration error: bad");

        let err: ApiError = EngineError::ThreadPool("spawn failed".into()).into();
        assert_eq!(err.to_string(), "engine error: thread pool error: spawn failed");
    }
}
