//! Per-column PII analysis of a table.

use crate::analysis::{ColumnAnalysis, PiiSummary, TableAnalysis};
use crate::classifier::classify_name;
use crate::table::{Column, Table};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use veil_core::{DetectionConfig, PiiCategory, Result};
use veil_detect::PiiDetector;

/// Scans the head of every column and summarises what it finds.
///
/// Each column contributes at most `sample_rows` scanned cells, so the cost of
/// an analysis is bounded by the column count rather than the row count.
#[derive(Debug, Clone)]
pub struct TableAnalyzer {
    detector: PiiDetector,
    limits: DetectionConfig,
}

impl TableAnalyzer {
    /// Create an analyzer with the default sampling limits.
    #[must_use]
    pub fn new(detector: PiiDetector) -> Self {
        Self {
            detector,
            limits: DetectionConfig::default(),
        }
    }

    /// Override the sampling limits.
    #[must_use]
    pub fn with_limits(mut self, limits: DetectionConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Analyze a table.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the table is not rectangular or has
    /// duplicate column names. No partial result is produced.
    pub fn analyze(&self, table: &Table) -> Result<TableAnalysis> {
        let row_count = table.validate()?;
        let column_count = table.column_count();

        let mut by_category = BTreeMap::new();
        let columns: Vec<ColumnAnalysis> = table
            .columns
            .iter()
            .map(|column| self.analyze_column(column, &mut by_category))
            .collect();

        let total_pii: usize = columns.iter().map(|c| c.pii_count).sum();
        let pii_percentage = if row_count == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let ratio = total_pii as f64 / (row_count * column_count) as f64;
            ratio * 100.0
        };

        info!(
            "Analyzed {} rows x {} columns, {} PII spans found",
            row_count, column_count, total_pii
        );

        Ok(TableAnalysis {
            row_count,
            column_count,
            columns,
            summary: PiiSummary {
                total_pii,
                by_category,
                pii_percentage,
            },
        })
    }

    fn analyze_column(
        &self,
        column: &Column,
        by_category: &mut BTreeMap<PiiCategory, usize>,
    ) -> ColumnAnalysis {
        let mut examples = Vec::new();
        let mut pii_count = 0;

        for (row, cell) in column.values.iter().take(self.limits.sample_rows).enumerate() {
            let Some(text) = cell.as_text() else {
                continue;
            };

            let spans = match self.detector.try_aggregate(&text) {
                Ok(spans) => spans,
                Err(e) => {
                    warn!("Skipping cell {} of column '{}': {}", row, column.name, e);
                    continue;
                }
            };

            pii_count += spans.len();
            for span in spans {
                *by_category.entry(span.category).or_insert(0) += 1;
                if examples.len() < self.limits.max_examples {
                    examples.push(span);
                }
            }
        }

        debug!("Column '{}': {} PII spans in sampled cells", column.name, pii_count);

        ColumnAnalysis {
            name: column.name.clone(),
            declared_type: column.inferred_type(),
            sample_values: column
                .values
                .iter()
                .take(self.limits.max_sample_values)
                .cloned()
                .collect(),
            examples,
            suspected_categories: classify_name(&column.name),
            pii_count,
        }
    }
}
