//! Pattern-based redaction of voter comments.
//!
//! The ballot service additionally redacts registered voter and candidate
//! names, which requires the registry. What remains here are the patterns that
//! can be applied anywhere, so the voter can see what will happen to their
//! comment before submitting it.

use lazy_static::lazy_static;
use regex::Regex;

pub const REDACTED_PHONE_NUMBER: &str = "[REDACTED PHONE NUMBER]";
pub const REDACTED_EMAIL: &str = "[REDACTED EMAIL]";
pub const REDACTED_NATIONAL_ID: &str = "[REDACTED NATIONAL ID]";

lazy_static! {
    static ref PHONE_NUMBER: Regex = Regex::new(r"\(?\d{3}\)?[-\s]?\d{3}[-\s]?\d{4}").unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref NATIONAL_ID_PATTERNS: [Regex; 3] = [
        Regex::new(r"\b\d{9}\b").unwrap(),
        Regex::new(r"\d+-+\d+-+\d+").unwrap(),
        Regex::new(r"\d+\s+\d+\s+\d+").unwrap(),
    ];
}

/// Replaces phone numbers, email addresses and national-ID-shaped numbers.
/// Phone numbers are matched first so a ten-digit number is never reported as
/// a national ID.
///
/// A number found by a national-ID pattern is redacted everywhere it occurs in
/// the text, including occurrences the pattern itself would not match (e.g.
/// the same digits glued to a word).
#[must_use]
pub fn redact_free_text(free_text: &str) -> String {
    let redacted = PHONE_NUMBER.replace_all(free_text, REDACTED_PHONE_NUMBER);
    let mut redacted = EMAIL.replace_all(&redacted, REDACTED_EMAIL).into_owned();

    for pattern in NATIONAL_ID_PATTERNS.iter() {
        let found: Vec<String> = pattern
            .find_iter(&redacted)
            .map(|m| m.as_str().to_owned())
            .collect();

        for national_id in found {
            redacted = redacted.replace(&national_id, REDACTED_NATIONAL_ID);
        }
    }

    redacted
}

/// Whether submitting `free_text` would have anything redacted.
#[must_use]
pub fn contains_redactable_text(free_text: &str) -> bool {
    redact_free_text(free_text) != free_text
}
