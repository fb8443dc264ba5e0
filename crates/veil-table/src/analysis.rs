//! Result types produced by table analysis.

use crate::table::{Cell, ColumnType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use veil_core::{PiiCategory, PiiSpan};

/// Per-column analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    /// Column header
    pub name: String,

    /// Scalar kind inferred from the column's cells
    pub declared_type: ColumnType,

    /// Leading raw cells, unredacted, for preview
    pub sample_values: Vec<Cell>,

    /// Leading detected spans, capped
    pub examples: Vec<PiiSpan>,

    /// Categories suggested by the header alone
    pub suspected_categories: BTreeSet<PiiCategory>,

    /// Total spans found across the sampled cells (not capped)
    pub pii_count: usize,
}

/// Aggregate counts across all columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PiiSummary {
    /// Sum of `pii_count` over every column
    pub total_pii: usize,

    /// Span count per category
    pub by_category: BTreeMap<PiiCategory, usize>,

    /// `total_pii / (rows * columns) * 100`, or 0 for an empty table
    pub pii_percentage: f64,
}

/// Whole-table analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableAnalysis {
    /// Number of rows in the table
    pub row_count: usize,

    /// Number of columns in the table
    pub column_count: usize,

    /// Per-column results in input order
    pub columns: Vec<ColumnAnalysis>,

    /// Totals
    pub summary: PiiSummary,
}

impl TableAnalysis {
    /// Check if any PII was detected.
    #[must_use]
    pub fn has_pii(&self) -> bool {
        self.summary.total_pii > 0
    }

    /// Look up a column result by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnAnalysis> {
        self.columns.iter().find(|c| c.name == name)
    }
}
