//! Entity detection for autolinking free-form text.
//!
//! This library finds geographic coordinates and telephone numbers in
//! text and produces match records an autolinking engine can render as
//! clickable anchors. It does no rendering itself.
//!
//! # Features
//!
//! - **Country Phone Patterns**: US, SE, GB, FR, PT, IE and DE formats
//! - **Pattern Combination**: union any set of country patterns into one
//!   flat alternation that can be combined again
//! - **Coordinates**: decimal `lat, lng` pairs within valid ranges
//! - **Uniform Matches**: every match exposes type, href and label
//!
//! # Architecture
//!
//! - [`domain`]: patterns and match records
//! - [`matchers`]: matcher descriptors and a scan driver
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! use linkmatch::{LinkScanner, Match};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = LinkScanner::with_default_matchers()?;
//! let records = scanner.scan("Call (415) 555-2671 at 40.7128, -74.0060")?;
//!
//! assert_eq!(records[0].anchor_href(), "tel:(415) 555-2671");
//! assert_eq!(records[1].anchor_text(), "40.7128, -74.0060");
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a Phone Pattern
//!
//! ```
//! use linkmatch::combined_pattern;
//!
//! let pattern = combined_pattern(["GB", "US"]).unwrap();
//! assert_eq!(pattern.components().len(), 2);
//! assert!(pattern.regex().is_match("+44 20 7946 0958"));
//! ```

pub mod domain;
pub mod error;
pub mod matchers;

pub use domain::{
    combined_pattern, combined_pattern_for, default_combined_pattern, union, Boundary,
    BoundedRegex, CombinedPattern, CountryCode, CountryPattern, CountryRegistry, LatLngMatch,
    Match, MatchConfig, MatchKind, MatchRecord, PatternPart, PhoneMatch, Span,
};
pub use error::{LinkError, LinkResult};
pub use matchers::{
    default_matchers, matchers_with, EntityMatcher, LatLngMatcher, LinkScanner, MatcherOptions,
    PhoneMatcher, ALL_COUNTRIES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_creation() {
        let scanner = LinkScanner::with_default_matchers().unwrap();
        assert_eq!(scanner.matchers().len(), 2);
    }

    #[test]
    fn test_registry_lookup() {
        assert!(CountryRegistry::global().lookup(CountryCode::IE).is_some());
    }
}
