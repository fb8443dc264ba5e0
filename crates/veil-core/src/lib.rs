//! Veil Core - Foundation crate for the Veil PII detection engine.
//!
//! This crate provides the shared span types, error handling, configuration
//! management, and tracing setup that the detection and table crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - PII categories and detected spans
//! - [`telemetry`] - Tracing subscriber initialisation
//!
//! # Example
//!
//! ```rust
//! use veil_core::{AppConfig, PiiCategory};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.detection.sample_rows, 100);
//! assert_eq!(PiiCategory::Email.as_str(), "Email");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DetectionConfig, LoggingConfig, NerConfig, RedactionConfig};
pub use error::{ConfigError, ConfigResult, Result, VeilError};
pub use types::{PiiCategory, PiiSpan};
