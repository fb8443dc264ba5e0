//! Error types for named-entity backends.

use thiserror::Error;

/// Errors a named-entity backend can report.
#[derive(Error, Debug)]
pub enum NerError {
    /// The backend could not be initialised (model missing, load failure)
    #[error("NER model failed to load: {0}")]
    ModelLoad(String),

    /// A single extraction call failed
    #[error("entity extraction failed: {message}")]
    Extraction {
        /// Error message
        message: String,
    },
}

/// Result type alias for NER operations.
pub type Result<T> = std::result::Result<T, NerError>;
