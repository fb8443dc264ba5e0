//! Analyze-and-redact facade over a shared detector.

use crate::analysis::TableAnalysis;
use crate::analyzer::TableAnalyzer;
use crate::policy::RedactionPolicy;
use crate::redactor::{RedactionReport, Redactor};
use crate::table::Table;
use std::sync::Arc;
use veil_core::{AppConfig, Result};
use veil_detect::{EntityExtractor, PiiDetector};

/// Single entry point for analysing and cleaning tables.
///
/// The engine holds no per-call state: every `analyze` or `apply` works on
/// caller-owned data and may run concurrently with any other call.
#[derive(Debug, Clone)]
pub struct PiiEngine {
    analyzer: TableAnalyzer,
    redactor: Redactor,
}

impl PiiEngine {
    /// Create an engine around an existing detector, with default limits.
    #[must_use]
    pub fn new(detector: PiiDetector) -> Self {
        Self {
            analyzer: TableAnalyzer::new(detector.clone()),
            redactor: Redactor::new(detector),
        }
    }

    /// Build an engine from configuration.
    ///
    /// # Errors
    /// Returns `NerUnavailable` if NER is enabled but `extractor` is `None`.
    pub fn from_config(
        config: &AppConfig,
        extractor: Option<Arc<dyn EntityExtractor>>,
    ) -> Result<Self> {
        let detector = PiiDetector::from_config(&config.ner, extractor)?;
        Ok(Self {
            analyzer: TableAnalyzer::new(detector.clone()).with_limits(config.detection.clone()),
            redactor: Redactor::with_config(detector, &config.redaction),
        })
    }

    /// Analyze a table for PII.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the table cannot be interpreted.
    pub fn analyze(&self, table: &Table) -> Result<TableAnalysis> {
        self.analyzer.analyze(table)
    }

    /// Produce a cleaned copy of `table` under `policy`.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the table cannot be interpreted.
    pub fn apply(&self, table: &Table, policy: &RedactionPolicy) -> Result<Table> {
        self.redactor.apply(table, policy)
    }

    /// Like [`PiiEngine::apply`], also reporting what changed.
    pub fn apply_with_report(
        &self,
        table: &Table,
        policy: &RedactionPolicy,
    ) -> Result<(Table, RedactionReport)> {
        self.redactor.apply_with_report(table, policy)
    }
}
