//! In-memory table model.
//!
//! Tables arrive already decoded: an ordered list of named columns, each an
//! ordered list of scalar cells.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use veil_core::{Result, VeilError};

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// Text form used for detection, or `None` for null-equivalent values.
    ///
    /// `Null`, the empty string and NaN are null-equivalent.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Float(f) if f.is_nan() => None,
            Self::Float(f) => Some(Cow::Owned(f.to_string())),
            Self::Int(i) => Some(Cow::Owned(i.to_string())),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        }
    }

    /// Whether the cell is null-equivalent.
    #[must_use]
    pub fn is_null_like(&self) -> bool {
        self.as_text().is_none()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Scalar kind inferred from a column's non-null cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// All text
    Text,
    /// All integers
    Integer,
    /// Floats, possibly mixed with integers
    Float,
    /// All booleans
    Boolean,
    /// More than one incompatible kind
    Mixed,
    /// No non-null cells
    Empty,
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column header
    pub name: String,
    /// Cells in row order
    pub values: Vec<Cell>,
}

impl Column {
    /// Create a column from anything convertible into cells.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Infer the scalar kind of this column from its non-null cells.
    #[must_use]
    pub fn inferred_type(&self) -> ColumnType {
        use ColumnType::{Boolean, Empty, Float, Integer, Mixed, Text};

        self.values
            .iter()
            .filter(|cell| !cell.is_null_like())
            .map(|cell| match cell {
                Cell::Null => Empty,
                Cell::Bool(_) => Boolean,
                Cell::Int(_) => Integer,
                Cell::Float(_) => Float,
                Cell::Text(_) => Text,
            })
            .fold(Empty, |acc, kind| match (acc, kind) {
                (Empty, k) => k,
                (a, k) if a == k => a,
                (Integer | Float, Integer | Float) => Float,
                _ => Mixed,
            })
    }
}

/// An ordered collection of equally long columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Columns in display order
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns. Shape is checked by [`Table::validate`].
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows (length of the first column).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Check that the table is rectangular with unique column names.
    ///
    /// Returns the row count on success.
    ///
    /// # Errors
    /// Returns `MalformedInput` for ragged or duplicate columns.
    pub fn validate(&self) -> Result<usize> {
        let rows = self.row_count();
        let mut seen = HashSet::with_capacity(self.columns.len());

        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(VeilError::MalformedInput(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
            if column.values.len() != rows {
                return Err(VeilError::MalformedInput(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.values.len(),
                    rows
                )));
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(Cell::Null.as_text(), None);
        assert_eq!(Cell::from("").as_text(), None);
        assert_eq!(Cell::Float(f64::NAN).as_text(), None);
        assert_eq!(Cell::Int(5_551_234_567).as_text().as_deref(), Some("5551234567"));
        assert_eq!(Cell::Float(2.5).as_text().as_deref(), Some("2.5"));
        assert_eq!(Cell::Bool(true).as_text().as_deref(), Some("true"));
        assert_eq!(Cell::from("x").as_text().as_deref(), Some("x"));
    }

    #[test]
    fn test_cell_from_option() {
        assert_eq!(Cell::from(None::<&str>), Cell::Null);
        assert_eq!(Cell::from(Some(3_i64)), Cell::Int(3));
    }

    #[test]
    fn test_cell_json_shape() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"[null, true, 7, 1.5, "hi"]"#).expect("parse cells");
        assert_eq!(
            cells,
            vec![
                Cell::Null,
                Cell::Bool(true),
                Cell::Int(7),
                Cell::Float(1.5),
                Cell::from("hi"),
            ]
        );
    }

    #[test]
    fn test_inferred_type() {
        assert_eq!(Column::new("a", ["x", "y"]).inferred_type(), ColumnType::Text);
        assert_eq!(Column::new("a", [1_i64, 2]).inferred_type(), ColumnType::Integer);
        assert_eq!(
            Column::new("a", [Cell::Int(1), Cell::Float(2.0), Cell::Null]).inferred_type(),
            ColumnType::Float
        );
        assert_eq!(
            Column::new("a", [Cell::Int(1), Cell::from("x")]).inferred_type(),
            ColumnType::Mixed
        );
        assert_eq!(Column::new("a", [Cell::Null]).inferred_type(), ColumnType::Empty);
    }

    #[test]
    fn test_null_like_cells_do_not_set_type() {
        assert!(Cell::Null.is_null_like());
        assert!(Cell::from("").is_null_like());
        assert!(Cell::Float(f64::NAN).is_null_like());
        assert!(!Cell::Int(0).is_null_like());
        assert!(!Cell::from(" ").is_null_like());

        assert_eq!(
            Column::new("a", [Cell::Int(1), Cell::from(""), Cell::Int(2)]).inferred_type(),
            ColumnType::Integer
        );
        assert_eq!(
            Column::new("a", [Cell::from("x"), Cell::Float(f64::NAN)]).inferred_type(),
            ColumnType::Text
        );
        assert_eq!(
            Column::new("a", [Cell::from(""), Cell::Null]).inferred_type(),
            ColumnType::Empty
        );
    }

    #[test]
    fn test_validate_ragged() {
        let table = Table::new(vec![
            Column::new("a", ["1", "2", "3"]),
            Column::new("b", ["1", "2"]),
        ]);
        let err = table.validate().expect_err("ragged table");
        assert!(matches!(err, VeilError::MalformedInput(_)));
    }

    #[test]
    fn test_validate_duplicate_names() {
        let table = Table::new(vec![Column::new("a", ["1"]), Column::new("a", ["2"])]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let table = Table::new(vec![Column::new("a", ["1", "2"]), Column::new("b", [1_i64, 2])]);
        assert_eq!(table.validate().expect("valid table"), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(Table::default().validate().is_ok());
    }
}
