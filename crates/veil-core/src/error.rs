//! Core error types for the Veil engine.
//!
//! Detection itself is total: pattern matching and checksum validation never
//! fail. The variants here cover the few places a call can be rejected.

use thiserror::Error;

/// Central error type for all Veil operations.
#[derive(Error, Debug)]
pub enum VeilError {
    /// The input table cannot be interpreted at all (ragged or duplicate columns)
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The named-entity backend is not available
    #[error("NER backend unavailable: {0}")]
    NerUnavailable(String),

    /// The requested redaction policy is not recognised
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `VeilError`.
pub type Result<T> = std::result::Result<T, VeilError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
