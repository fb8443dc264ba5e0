//! Span aggregation across every detector.

use crate::error::Result;
use crate::ner::{EntityExtractor, NamedEntityMatcher};
use crate::patterns;
use std::sync::Arc;
use tracing::warn;
use veil_core::{NerConfig, PiiSpan, VeilError};

/// Runs the pattern matchers and the named-entity matcher over one text value.
///
/// The result is the plain concatenation of every detector's output, pattern
/// matchers first. Overlapping and duplicate spans are kept; consumers that
/// rewrite text must handle overlap themselves.
#[derive(Debug, Clone)]
pub struct PiiDetector {
    ner: Option<NamedEntityMatcher>,
}

impl PiiDetector {
    /// Create a detector backed by the given NER backend.
    #[must_use]
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self {
            ner: Some(NamedEntityMatcher::new(extractor)),
        }
    }

    /// Create a detector that only runs the pattern matchers.
    #[must_use]
    pub fn patterns_only() -> Self {
        Self { ner: None }
    }

    /// Build a detector according to the NER configuration.
    ///
    /// # Errors
    /// Returns `NerUnavailable` when NER is enabled but no backend was supplied.
    pub fn from_config(
        config: &NerConfig,
        extractor: Option<Arc<dyn EntityExtractor>>,
    ) -> veil_core::Result<Self> {
        match (config.enabled, extractor) {
            (true, Some(extractor)) => Ok(Self::new(extractor)),
            (true, None) => Err(VeilError::NerUnavailable(
                "NER is enabled but no backend was provided".to_string(),
            )),
            (false, _) => Ok(Self::patterns_only()),
        }
    }

    /// Whether named-entity matching is active.
    #[must_use]
    pub fn has_ner(&self) -> bool {
        self.ner.is_some()
    }

    /// Detect spans, surfacing NER backend failures.
    pub fn try_aggregate(&self, text: &str) -> Result<Vec<PiiSpan>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut spans = patterns::scan(text);
        if let Some(ner) = &self.ner {
            spans.extend(ner.extract(text)?);
        }
        Ok(spans)
    }

    /// Detect spans in an optional text value.
    ///
    /// `None` and the empty string yield no spans. A failing NER backend is
    /// logged and only the pattern spans are returned.
    pub fn aggregate<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<PiiSpan> {
        let Some(text) = text.into() else {
            return Vec::new();
        };

        match self.try_aggregate(text) {
            Ok(spans) => spans,
            Err(e) => {
                warn!("NER failed, falling back to pattern spans: {}", e);
                patterns::scan(text)
            }
        }
    }
}
