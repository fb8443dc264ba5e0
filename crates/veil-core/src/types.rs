//! Shared types used across the Veil engine.
//!
//! This module defines the PII categories and the span type every detector
//! produces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic categories of personally identifiable information.
///
/// The serialized form doubles as the tag used in anonymization placeholders
/// and in per-category summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PiiCategory {
    /// Person name
    Name,
    /// Geopolitical entity or physical location
    Location,
    /// Company, agency or institution
    Organization,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Social Security Number
    #[serde(rename = "SSN")]
    Ssn,
    /// Payment card number
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl PiiCategory {
    /// Get the tag for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Location => "Location",
            Self::Organization => "Organization",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Ssn => "SSN",
            Self::CreditCard => "Credit Card",
        }
    }

    /// Placeholder that replaces a whole cell under anonymization.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("[{}_REDACTED]", self.as_str())
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected occurrence of PII inside a scanned text.
///
/// `start` and `end` are half-open character offsets (not byte offsets) into
/// the scanned text, with `start < end`. Confidence is fixed per detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiSpan {
    /// The matched substring
    pub text: String,

    /// Semantic category of the match
    pub category: PiiCategory,

    /// Detector-internal tag (`EMAIL`, `PERSON`, ...)
    pub source_label: String,

    /// Start character offset (inclusive)
    pub start: usize,

    /// End character offset (exclusive)
    pub end: usize,

    /// Detector confidence in `[0, 1]`
    pub confidence: f32,
}

impl PiiSpan {
    /// Create a new span.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        category: PiiCategory,
        source_label: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> Self {
        Self {
            text: text.into(),
            category,
            source_label: source_label.into(),
            start,
            end,
            confidence,
        }
    }

    /// Number of characters covered by the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&PiiCategory::CreditCard).expect("serialize category");
        assert_eq!(json, r#""Credit Card""#);

        let json = serde_json::to_string(&PiiCategory::Ssn).expect("serialize category");
        assert_eq!(json, r#""SSN""#);

        let parsed: PiiCategory = serde_json::from_str(r#""Email""#).expect("parse category");
        assert_eq!(parsed, PiiCategory::Email);
    }

    #[test]
    fn test_category_tag_matches_serde() {
        for category in [
            PiiCategory::Name,
            PiiCategory::Location,
            PiiCategory::Organization,
            PiiCategory::Email,
            PiiCategory::Phone,
            PiiCategory::Date,
            PiiCategory::Time,
            PiiCategory::Ssn,
            PiiCategory::CreditCard,
        ] {
            let json = serde_json::to_string(&category).expect("serialize category");
            assert_eq!(json.trim_matches('"'), category.as_str());
        }
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(PiiCategory::Email.placeholder(), "[Email_REDACTED]");
        assert_eq!(PiiCategory::Ssn.placeholder(), "[SSN_REDACTED]");
    }

    #[test]
    fn test_span_len() {
        let span = PiiSpan::new("John", PiiCategory::Name, "PERSON", 0, 4, 0.95);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }
}
