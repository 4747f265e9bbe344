//! Common test utilities and helpers.
//!
//! Provides full-span assertions over bounded patterns and a small
//! fixture set of numbers per country.

#![allow(dead_code)]

use linkmatch::{BoundedRegex, CountryCode};

/// Returns true if the first match of `pattern` in `text` spans all of it.
pub fn matches_entirely(pattern: &BoundedRegex, text: &str) -> bool {
    pattern
        .find(text)
        .is_some_and(|m| m.offset == 0 && m.end() == text.len())
}

/// Asserts that `pattern` consumes `text` as a single full-span match.
///
/// # Panics
/// Panics if the first match is missing or does not cover the whole text.
pub fn assert_full_match(pattern: &BoundedRegex, text: &str) {
    assert!(
        matches_entirely(pattern, text),
        "Expected '{}' to match in full, first match was {:?}",
        text,
        pattern.find(text).map(|m| m.text)
    );
}

/// Asserts that `pattern` does not consume `text` as one match.
pub fn assert_not_full_match(pattern: &BoundedRegex, text: &str) {
    assert!(
        !matches_entirely(pattern, text),
        "Expected '{}' not to match in full",
        text
    );
}

/// Sample numbers each country pattern accepts in full.
pub fn sample_numbers() -> Vec<(CountryCode, &'static str)> {
    vec![
        (CountryCode::US, "(415) 555-2671"),
        (CountryCode::US, "415-555-2671"),
        (CountryCode::SE, "+46 70 1234 5678"),
        (CountryCode::GB, "+44 20 7946 0958"),
        (CountryCode::GB, "020 7946 0958"),
        (CountryCode::FR, "+33 123 456 789"),
        (CountryCode::PT, "+351 212 345 678"),
        (CountryCode::IE, "+353 1234 567 890"),
        (CountryCode::DE, "+49 30 1234 5678"),
    ]
}
