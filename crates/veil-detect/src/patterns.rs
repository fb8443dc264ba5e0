//! Regex-based PII matchers.
//!
//! Each matcher is pure and independent: overlapping hits from different
//! matchers (or from the two phone alternatives) are all emitted. Offsets in
//! the returned spans are character offsets.

use crate::luhn::is_valid_luhn;
use once_cell::sync::Lazy;
use regex::{Match, Regex};
use veil_core::{PiiCategory, PiiSpan};

/// Confidence assigned to email matches.
pub const EMAIL_CONFIDENCE: f32 = 0.99;
/// Confidence assigned to phone matches.
pub const PHONE_CONFIDENCE: f32 = 0.90;
/// Confidence assigned to SSN-shaped matches.
pub const SSN_CONFIDENCE: f32 = 0.98;
/// Confidence assigned to checksum-valid card numbers.
pub const CREDIT_CARD_CONFIDENCE: f32 = 0.85;

// Compiled regex patterns
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Email regex is hardcoded and valid")
});

static DOMESTIC_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b")
        .expect("Domestic phone regex is hardcoded and valid")
});

static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+[0-9]{1,3}[-.\s]?\(?[0-9]{1,4}\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}\b")
        .expect("International phone regex is hardcoded and valid")
});

static SSN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{3}-?[0-9]{2}-?[0-9]{4}\b").expect("SSN regex is hardcoded and valid")
});

static CREDIT_CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[0-9]{4}[- ]?){3}[0-9]{4}\b")
        .expect("Credit card regex is hardcoded and valid")
});

/// Run every pattern matcher over `text`.
///
/// Order: email, phone, SSN, credit card.
#[must_use]
pub fn scan(text: &str) -> Vec<PiiSpan> {
    let mut spans = scan_email(text);
    spans.extend(scan_phone(text));
    spans.extend(scan_ssn(text));
    spans.extend(scan_credit_card(text));
    spans
}

/// Find email addresses.
#[must_use]
pub fn scan_email(text: &str) -> Vec<PiiSpan> {
    collect(&EMAIL_REGEX, text, PiiCategory::Email, "EMAIL", EMAIL_CONFIDENCE)
}

/// Find phone numbers, domestic form first, then international.
#[must_use]
pub fn scan_phone(text: &str) -> Vec<PiiSpan> {
    let mut spans = collect(
        &DOMESTIC_PHONE_REGEX,
        text,
        PiiCategory::Phone,
        "PHONE",
        PHONE_CONFIDENCE,
    );
    spans.extend(collect(
        &INTERNATIONAL_PHONE_REGEX,
        text,
        PiiCategory::Phone,
        "PHONE",
        PHONE_CONFIDENCE,
    ));
    spans
}

/// Find SSN-shaped numbers.
///
/// Shares its shape with separator-less phone numbers; no disambiguation is
/// attempted.
#[must_use]
pub fn scan_ssn(text: &str) -> Vec<PiiSpan> {
    collect(&SSN_REGEX, text, PiiCategory::Ssn, "SSN", SSN_CONFIDENCE)
}

/// Find 16-digit card numbers that pass the Luhn check.
#[must_use]
pub fn scan_credit_card(text: &str) -> Vec<PiiSpan> {
    CREDIT_CARD_REGEX
        .find_iter(text)
        .filter(|m| {
            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            is_valid_luhn(&digits)
        })
        .map(|m| {
            to_span(
                text,
                &m,
                PiiCategory::CreditCard,
                "CREDIT_CARD",
                CREDIT_CARD_CONFIDENCE,
            )
        })
        .collect()
}

fn collect(
    regex: &Regex,
    text: &str,
    category: PiiCategory,
    label: &str,
    confidence: f32,
) -> Vec<PiiSpan> {
    regex
        .find_iter(text)
        .map(|m| to_span(text, &m, category, label, confidence))
        .collect()
}

/// Convert a byte-offset regex match into a char-offset span.
fn to_span(
    text: &str,
    m: &Match<'_>,
    category: PiiCategory,
    label: &str,
    confidence: f32,
) -> PiiSpan {
    let start = text[..m.start()].chars().count();
    let end = start + m.as_str().chars().count();
    PiiSpan::new(m.as_str(), category, label, start, end, confidence)
}
