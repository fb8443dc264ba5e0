//! Veil Detect - PII span detection for free text.
//!
//! This crate finds personally identifiable information inside a single text
//! value and reports it as a flat list of [`PiiSpan`]s with character offsets.
//!
//! # Features
//!
//! - **Pattern Matchers**: email, phone (domestic and international), SSN and card numbers
//! - **Checksum Validation**: card-shaped candidates must pass the Luhn check
//! - **Named Entities**: names, places, organisations, dates and times via a pluggable backend
//! - **Aggregation**: all detectors concatenated, overlaps preserved
//!
//! # Example
//!
//! ```rust
//! use veil_detect::{is_valid_luhn, PiiDetector};
//! use veil_core::PiiCategory;
//!
//! let detector = PiiDetector::patterns_only();
//! let spans = detector.aggregate("reach me at jane@example.org");
//! assert_eq!(spans[0].category, PiiCategory::Email);
//!
//! assert!(is_valid_luhn("4111111111111111"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod detector;
pub mod error;
pub mod luhn;
pub mod ner;
pub mod patterns;

// Re-export commonly used types
pub use detector::PiiDetector;
pub use error::{NerError, Result};
pub use luhn::is_valid_luhn;
pub use ner::{Entity, EntityExtractor, NamedEntityMatcher};
pub use veil_core::{PiiCategory, PiiSpan};
