//! Veil Table - PII analysis and redaction for tabular data.
//!
//! This crate applies the span detectors from `veil-detect` to already-decoded
//! tables: it samples each column, summarises what it finds, and rewrites
//! tables under a redaction policy.
//!
//! ## Architecture
//!
//! - **Table model**: ordered, named columns of scalar cells
//! - **Column Classifier**: header-keyword suspicion, independent of content
//! - **Table Analyzer**: head-sampled, per-column span counts and examples
//! - **Redactor**: redact, anonymize or remove, always into a fresh table
//!
//! ## Example
//!
//! ```rust
//! use veil_detect::PiiDetector;
//! use veil_table::{Column, PiiEngine, RedactionAction, RedactionPolicy, Table};
//!
//! let engine = PiiEngine::new(PiiDetector::patterns_only());
//! let table = Table::new(vec![
//!     Column::new("id", [1_i64, 2]),
//!     Column::new("email", ["ann@example.com", "bob@example.com"]),
//! ]);
//!
//! let analysis = engine.analyze(&table)?;
//! assert_eq!(analysis.summary.total_pii, 2);
//!
//! let policy = RedactionPolicy::new(RedactionAction::Remove).with_columns(["email"]);
//! let cleaned = engine.apply(&table, &policy)?;
//! assert_eq!(cleaned.column_count(), 1);
//! # Ok::<(), veil_core::VeilError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Analysis result types.
pub mod analysis;
/// Table analyzer.
pub mod analyzer;
/// Column name classifier.
pub mod classifier;
/// Analyze-and-redact facade.
pub mod engine;
/// Redaction policy.
pub mod policy;
/// Table redactor.
pub mod redactor;
/// Table model.
pub mod table;

pub use analysis::{ColumnAnalysis, PiiSummary, TableAnalysis};
pub use analyzer::TableAnalyzer;
pub use classifier::classify_name;
pub use engine::PiiEngine;
pub use policy::{RedactionAction, RedactionPolicy};
pub use redactor::{redact_spans, RedactionReport, Redactor};
pub use table::{Cell, Column, ColumnType, Table};

// Re-export commonly used detection types for convenience
pub use veil_detect::{is_valid_luhn, EntityExtractor, PiiCategory, PiiDetector, PiiSpan};
