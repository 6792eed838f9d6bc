//! Error types for the core segmentation layer

use thiserror::Error;

/// Errors raised by the core layer.
///
/// Irregular prose (unbalanced quotes, doubled punctuation, a missing final
/// terminator) is never an error; only undecodable input and invalid
/// configuration are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input buffer is not valid UTF-8
    #[error("invalid UTF-8 sequence at byte {position}")]
    Encoding {
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// Configuration rejected before segmentation started
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<std::str::Utf8Error> for CoreError {
    fn from(err: std::str::Utf8Error) -> Self {
        CoreError::Encoding {
            position: err.valid_up_to(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
