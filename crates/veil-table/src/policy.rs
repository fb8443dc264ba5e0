//! Redaction policy: what to do, and to which columns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use veil_core::VeilError;

/// How detected PII is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionAction {
    /// Overwrite each detected span with block characters
    Redact,
    /// Replace the whole cell with a category placeholder
    Anonymize,
    /// Drop the column
    Remove,
}

impl RedactionAction {
    /// Get the string representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Redact => "redact",
            Self::Anonymize => "anonymize",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for RedactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactionAction {
    type Err = VeilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redact" => Ok(Self::Redact),
            "anonymize" => Ok(Self::Anonymize),
            "remove" => Ok(Self::Remove),
            other => Err(VeilError::InvalidPolicy(format!(
                "unknown action '{other}', must be one of: redact, anonymize, remove"
            ))),
        }
    }
}

/// An action plus the columns it applies to.
///
/// `None` or an empty set targets every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Action to apply
    pub action: RedactionAction,
    /// Target column names
    #[serde(default)]
    pub columns: Option<BTreeSet<String>>,
}

impl RedactionPolicy {
    /// Create a policy targeting every column.
    #[must_use]
    pub fn new(action: RedactionAction) -> Self {
        Self {
            action,
            columns: None,
        }
    }

    /// Restrict the policy to the named columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the named column is targeted.
    #[must_use]
    pub fn targets(&self, column: &str) -> bool {
        match &self.columns {
            Some(columns) if !columns.is_empty() => columns.contains(column),
            _ => true,
        }
    }
}
