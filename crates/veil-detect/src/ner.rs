//! Named-entity matching on top of a pluggable NER backend.
//!
//! The backend is anything implementing [`EntityExtractor`]. Entity kinds are
//! mapped onto PII categories through a fixed table; kinds outside the table
//! are dropped.

use crate::error::{NerError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use veil_core::{PiiCategory, PiiSpan, VeilError};

/// Confidence assigned to every NER-sourced span.
pub const NER_CONFIDENCE: f32 = 0.95;

/// An entity reported by the NER backend.
///
/// `start` and `end` are character offsets into the text passed to
/// [`EntityExtractor::extract_entities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Backend label (`PERSON`, `GPE`, `ORG`, ...)
    pub label: String,
    /// Entity surface text
    pub text: String,
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

/// Trait for named-entity recognition backends.
///
/// Implementations must be side-effect free and safe for concurrent read-only
/// use, since a single backend is shared by every analysis in the process.
pub trait EntityExtractor: Send + Sync {
    /// Extract labelled entities from `text`.
    ///
    /// # Errors
    /// Returns error if the backend fails on this input.
    fn extract_entities(&self, text: &str) -> Result<Vec<Entity>>;
}

/// Map a backend label onto a PII category.
#[must_use]
pub fn category_for_label(label: &str) -> Option<PiiCategory> {
    match label {
        "PERSON" => Some(PiiCategory::Name),
        "GPE" | "LOC" => Some(PiiCategory::Location),
        "ORG" => Some(PiiCategory::Organization),
        "DATE" => Some(PiiCategory::Date),
        "TIME" => Some(PiiCategory::Time),
        _ => None,
    }
}

/// Turns backend entities into PII spans.
#[derive(Clone)]
pub struct NamedEntityMatcher {
    extractor: Arc<dyn EntityExtractor>,
}

impl std::fmt::Debug for NamedEntityMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedEntityMatcher").finish_non_exhaustive()
    }
}

impl NamedEntityMatcher {
    /// Create a matcher over the given backend.
    #[must_use]
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }

    /// Extract PII spans from `text`.
    ///
    /// Entities with unmapped labels are dropped, as are entities whose
    /// offsets fall outside `text`.
    pub fn extract(&self, text: &str) -> Result<Vec<PiiSpan>> {
        let entities = self.extractor.extract_entities(text)?;
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::with_capacity(entities.len());

        for entity in entities {
            let Some(category) = category_for_label(&entity.label) else {
                continue;
            };

            if entity.start >= entity.end || entity.end > chars.len() {
                warn!(
                    "Dropping {} entity with out-of-range offsets [{}, {}) for text of {} chars",
                    entity.label,
                    entity.start,
                    entity.end,
                    chars.len()
                );
                continue;
            }

            let matched: String = chars[entity.start..entity.end].iter().collect();
            spans.push(PiiSpan::new(
                matched,
                category,
                entity.label,
                entity.start,
                entity.end,
                NER_CONFIDENCE,
            ));
        }

        Ok(spans)
    }
}

static GLOBAL_EXTRACTOR: OnceCell<Arc<dyn EntityExtractor>> = OnceCell::new();

/// Initialise the process-wide NER backend, once.
///
/// The factory runs only on the first successful call; later calls return the
/// backend already installed.
///
/// # Errors
/// Returns `NerUnavailable` if the factory fails to build a backend.
pub fn init_global<F>(factory: F) -> veil_core::Result<Arc<dyn EntityExtractor>>
where
    F: FnOnce() -> Result<Arc<dyn EntityExtractor>>,
{
    GLOBAL_EXTRACTOR
        .get_or_try_init(|| {
            factory().map_err(|e: NerError| VeilError::NerUnavailable(e.to_string()))
        })
        .cloned()
}

/// Get the process-wide NER backend.
///
/// # Errors
/// Returns `NerUnavailable` if [`init_global`] has not succeeded yet.
pub fn global() -> veil_core::Result<Arc<dyn EntityExtractor>> {
    GLOBAL_EXTRACTOR.get().cloned().ok_or_else(|| {
        VeilError::NerUnavailable("no NER backend has been initialised".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(Vec<Entity>);

    impl EntityExtractor for FixedExtractor {
        fn extract_entities(&self, _text: &str) -> Result<Vec<Entity>> {
            Ok(self.0.clone())
        }
    }

    fn entity(label: &str, text: &str, start: usize, end: usize) -> Entity {
        Entity {
            label: label.to_string(),
            text: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(category_for_label("PERSON"), Some(PiiCategory::Name));
        assert_eq!(category_for_label("GPE"), Some(PiiCategory::Location));
        assert_eq!(category_for_label("LOC"), Some(PiiCategory::Location));
        assert_eq!(category_for_label("ORG"), Some(PiiCategory::Organization));
        assert_eq!(category_for_label("DATE"), Some(PiiCategory::Date));
        assert_eq!(category_for_label("TIME"), Some(PiiCategory::Time));
        assert_eq!(category_for_label("MONEY"), None);
        assert_eq!(category_for_label("person"), None);
    }

    #[test]
    fn test_extract_maps_and_drops() {
        let text = "Ada Lovelace visited London for $5";
        let matcher = NamedEntityMatcher::new(Arc::new(FixedExtractor(vec![
            entity("PERSON", "Ada Lovelace", 0, 12),
            entity("GPE", "London", 21, 27),
            entity("MONEY", "$5", 32, 34),
        ])));

        let spans = matcher.extract(text).expect("extract spans");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].category, PiiCategory::Name);
        assert_eq!(spans[0].source_label, "PERSON");
        assert_eq!(spans[1].category, PiiCategory::Location);
        assert_eq!(spans[1].text, "London");
        assert!(spans
            .iter()
            .all(|s| (s.confidence - NER_CONFIDENCE).abs() < f32::EPSILON));
    }

    #[test]
    fn test_out_of_range_entities_dropped() {
        let matcher = NamedEntityMatcher::new(Arc::new(FixedExtractor(vec![
            entity("PERSON", "Bob", 0, 30),
            entity("PERSON", "", 2, 2),
        ])));

        let spans = matcher.extract("Bob").expect("extract spans");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_entity_from_backend_json() {
        let json = r#"{"label": "ORG", "text": "Acme", "start": 10, "end": 14}"#;
        let parsed: Entity = serde_json::from_str(json).expect("parse entity");
        assert_eq!(parsed, entity("ORG", "Acme", 10, 14));

        let value = serde_json::to_value(&parsed).expect("serialize entity");
        assert_eq!(value["label"], "ORG");
        assert_eq!(value["end"], 14);
    }

    #[test]
    fn test_span_text_comes_from_source() {
        let matcher = NamedEntityMatcher::new(Arc::new(FixedExtractor(vec![entity(
            "PERSON", "Zoë", 4, 7,
        )])));

        let spans = matcher.extract("Hi, Zoë!").expect("extract spans");
        assert_eq!(spans[0].text, "Zoë");
    }
}
