//! Domain models for entity detection.
//!
//! This module holds the pattern core: per-country phone patterns, the
//! combinator that unions them, the coordinate pattern, and the match
//! records produced for each detected span.

pub mod boundary;
pub mod combinator;
pub mod coordinate;
pub mod country;
pub mod phone;
pub mod record;

pub use boundary::{Boundary, BoundedMatches, BoundedRegex, Span};
pub use combinator::{
    combined_pattern, combined_pattern_for, combined_pattern_in, default_combined_pattern, union,
    CombinedPattern, PatternPart, DEFAULT_COUNTRIES,
};
pub use coordinate::{coordinate_pattern, LatLngMatch, COORDINATE_PATTERN};
pub use country::{CountryCode, CountryPattern, CountryRegistry};
pub use phone::{PhoneMatch, TEL_SCHEME};
pub use record::{Match, MatchConfig, MatchKind, MatchRecord};
