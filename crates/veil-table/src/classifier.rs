//! Name-based suspicion scoring for columns.
//!
//! Independent of cell content: a column is suspected of holding a category
//! when its lower-cased header contains one of that category's keywords.

use std::collections::BTreeSet;
use veil_core::PiiCategory;

/// Keyword lists per category, checked by substring.
pub const COLUMN_KEYWORDS: &[(PiiCategory, &[&str])] = &[
    (PiiCategory::Email, &["email", "mail"]),
    (PiiCategory::Phone, &["phone", "mobile", "tel"]),
    (PiiCategory::Name, &["name", "first", "last", "full"]),
    (PiiCategory::Location, &["address", "city", "state", "zip"]),
    (PiiCategory::Ssn, &["ssn", "social"]),
];

/// Categories suggested by a column header. Every matching category is returned.
#[must_use]
pub fn classify_name(column_name: &str) -> BTreeSet<PiiCategory> {
    let lowered = column_name.to_lowercase();
    COLUMN_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(category, _)| *category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_category_union() {
        let categories = classify_name("Email_Address");
        assert_eq!(
            categories,
            BTreeSet::from([PiiCategory::Email, PiiCategory::Location])
        );
    }

    #[test]
    fn test_single_matches() {
        assert_eq!(classify_name("MOBILE"), BTreeSet::from([PiiCategory::Phone]));
        assert_eq!(classify_name("social_sec"), BTreeSet::from([PiiCategory::Ssn]));
        assert_eq!(classify_name("zip"), BTreeSet::from([PiiCategory::Location]));
    }

    #[test]
    fn test_no_match() {
        assert!(classify_name("amount").is_empty());
        assert!(classify_name("").is_empty());
    }

    #[test]
    fn test_substring_semantics() {
        // "full_name" hits two Name keywords but yields the category once
        assert_eq!(classify_name("full_name"), BTreeSet::from([PiiCategory::Name]));
        // "hotel" contains "tel"
        assert!(classify_name("hotel").contains(&PiiCategory::Phone));
    }
}
