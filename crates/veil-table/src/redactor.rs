//! Policy-driven rewriting of tables.
//!
//! The redactor never touches its input: every call builds a fresh table.

use crate::policy::{RedactionAction, RedactionPolicy};
use crate::table::{Cell, Column, Table};
use serde::{Deserialize, Serialize};
use tracing::info;
use veil_core::{PiiSpan, RedactionConfig, Result};
use veil_detect::PiiDetector;

/// Summary of a redaction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Action that was applied
    pub action: RedactionAction,
    /// Rows in the input table
    pub original_rows: usize,
    /// Rows in the output table
    pub processed_rows: usize,
    /// Columns dropped by `Remove`
    pub columns_removed: Vec<String>,
    /// Cells rewritten by `Redact` or `Anonymize`
    pub cells_rewritten: usize,
}

/// Applies a [`RedactionPolicy`] to a table.
#[derive(Debug, Clone)]
pub struct Redactor {
    detector: PiiDetector,
    block_char: char,
}

impl Redactor {
    /// Create a redactor with the default block character.
    #[must_use]
    pub fn new(detector: PiiDetector) -> Self {
        Self::with_config(detector, &RedactionConfig::default())
    }

    /// Create a redactor from rewrite settings.
    #[must_use]
    pub fn with_config(detector: PiiDetector, config: &RedactionConfig) -> Self {
        Self {
            detector,
            block_char: config.block_char,
        }
    }

    /// Apply `policy` to `table`, returning the cleaned copy.
    ///
    /// Unknown target column names are ignored.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the table is not rectangular or has
    /// duplicate column names.
    pub fn apply(&self, table: &Table, policy: &RedactionPolicy) -> Result<Table> {
        self.apply_with_report(table, policy).map(|(cleaned, _)| cleaned)
    }

    /// Apply `policy` to `table` and report what changed.
    pub fn apply_with_report(
        &self,
        table: &Table,
        policy: &RedactionPolicy,
    ) -> Result<(Table, RedactionReport)> {
        let original_rows = table.validate()?;
        let mut columns_removed = Vec::new();
        let mut cells_rewritten = 0;

        let columns: Vec<Column> = match policy.action {
            RedactionAction::Remove => table
                .columns
                .iter()
                .filter(|column| {
                    let removed = policy.targets(&column.name);
                    if removed {
                        columns_removed.push(column.name.clone());
                    }
                    !removed
                })
                .cloned()
                .collect(),
            action @ (RedactionAction::Redact | RedactionAction::Anonymize) => table
                .columns
                .iter()
                .map(|column| {
                    if !policy.targets(&column.name) {
                        return column.clone();
                    }
                    let values = column
                        .values
                        .iter()
                        .map(|cell| match self.rewrite_cell(cell, action) {
                            Some(rewritten) => {
                                cells_rewritten += 1;
                                rewritten
                            }
                            None => cell.clone(),
                        })
                        .collect();
                    Column {
                        name: column.name.clone(),
                        values,
                    }
                })
                .collect(),
        };

        let cleaned = Table::new(columns);
        let report = RedactionReport {
            action: policy.action,
            original_rows,
            processed_rows: original_rows,
            columns_removed,
            cells_rewritten,
        };

        info!(
            "Applied {} to {} rows: {} cells rewritten, {} columns removed",
            report.action,
            report.original_rows,
            report.cells_rewritten,
            report.columns_removed.len()
        );

        Ok((cleaned, report))
    }

    /// Rewrite one cell, or `None` when it holds no detected PII.
    fn rewrite_cell(&self, cell: &Cell, action: RedactionAction) -> Option<Cell> {
        let text = cell.as_text()?;
        let spans = self.detector.aggregate(&*text);
        let first = spans.first()?;

        match action {
            RedactionAction::Redact => Some(Cell::Text(redact_spans(
                &text,
                &spans,
                self.block_char,
            ))),
            RedactionAction::Anonymize => Some(Cell::Text(first.category.placeholder())),
            RedactionAction::Remove => None,
        }
    }
}

/// Overwrite every span in `text` with `block_char`, one per covered character.
///
/// Spans are applied rightmost-first against character positions. Replacement
/// preserves length, so overlapping spans are simply covered twice. Spans that
/// do not fit inside `text` are skipped.
#[must_use]
pub fn redact_spans(text: &str, spans: &[PiiSpan], block_char: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut ordered: Vec<&PiiSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| std::cmp::Reverse(span.start));

    for span in ordered {
        if span.start >= span.end || span.end > chars.len() {
            continue;
        }
        chars.splice(
            span.start..span.end,
            std::iter::repeat(block_char).take(span.end - span.start),
        );
    }

    chars.into_iter().collect()
}
