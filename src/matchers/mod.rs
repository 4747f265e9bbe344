//! Matcher descriptors registered with the autolinking engine.
//!
//! Each matcher pairs a detection pattern with a factory that turns a
//! detected span into a [`MatchRecord`]. The engine treats them all
//! through [`EntityMatcher`] and never needs to know which kind it holds.

pub mod scanner;

pub use scanner::LinkScanner;

use crate::domain::{
    combined_pattern, coordinate_pattern, BoundedRegex, CombinedPattern, CountryCode, LatLngMatch,
    MatchConfig, MatchKind, MatchRecord, PhoneMatch,
};
use crate::error::LinkResult;
use log::debug;

pub use crate::domain::Span;

/// Countries the phone matcher covers unless configured otherwise.
pub const ALL_COUNTRIES: &[CountryCode] = &[
    CountryCode::US,
    CountryCode::SE,
    CountryCode::GB,
    CountryCode::FR,
    CountryCode::PT,
    CountryCode::IE,
    CountryCode::DE,
];

/// A matchable entity kind: detection pattern plus match factory.
pub trait EntityMatcher: Send + Sync {
    /// Kind identifier this matcher registers under.
    fn kind(&self) -> MatchKind;

    /// Detection pattern, searched globally and without overlap.
    fn pattern(&self) -> &BoundedRegex;

    /// Builds the match object for one detected span.
    fn build(&self, config: &MatchConfig) -> LinkResult<MatchRecord>;

    /// Finds every non-empty span the pattern detects in `text`.
    ///
    /// Runs in time linear in the length of `text`.
    fn find_all<'t>(&self, text: &'t str) -> Vec<Span<'t>> {
        self.pattern()
            .find_iter(text)
            .filter(|span| !span.is_empty())
            .collect()
    }
}

/// Detects `lat, lng` decimal pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatLngMatcher;

impl EntityMatcher for LatLngMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::LatLng
    }

    fn pattern(&self) -> &BoundedRegex {
        coordinate_pattern()
    }

    fn build(&self, config: &MatchConfig) -> LinkResult<MatchRecord> {
        LatLngMatch::from_config(config).map(Into::into)
    }
}

/// Detects phone numbers for a fixed set of countries.
#[derive(Debug, Clone)]
pub struct PhoneMatcher {
    pattern: CombinedPattern,
}

impl PhoneMatcher {
    pub fn new(pattern: CombinedPattern) -> Self {
        Self { pattern }
    }

    /// Builds a matcher over the given country codes; see [`combined_pattern`].
    pub fn for_countries<I, S>(countries: I) -> LinkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        combined_pattern(countries).map(Self::new)
    }

    pub fn combined(&self) -> &CombinedPattern {
        &self.pattern
    }
}

impl EntityMatcher for PhoneMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Phone
    }

    fn pattern(&self) -> &BoundedRegex {
        self.pattern.regex()
    }

    fn build(&self, config: &MatchConfig) -> LinkResult<MatchRecord> {
        PhoneMatch::from_config(config).map(Into::into)
    }
}

/// Options for building the matcher set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Country codes the phone matcher covers. Unknown codes are skipped.
    pub countries: Vec<String>,
}

impl MatcherOptions {
    pub fn with_countries<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self::with_countries(ALL_COUNTRIES.iter().map(|c| c.as_str()))
    }
}

/// Coordinate and phone matchers covering [`ALL_COUNTRIES`].
pub fn default_matchers() -> LinkResult<Vec<Box<dyn EntityMatcher>>> {
    matchers_with(&MatcherOptions::default())
}

/// Coordinate and phone matchers, in that order.
pub fn matchers_with(options: &MatcherOptions) -> LinkResult<Vec<Box<dyn EntityMatcher>>> {
    let phone = PhoneMatcher::for_countries(&options.countries)?;
    debug!(
        "Built matcher set: latlng + phone ({} country pattern(s))",
        phone.combined().components().len()
    );
    Ok(vec![Box::new(LatLngMatcher), Box::new(phone)])
}
