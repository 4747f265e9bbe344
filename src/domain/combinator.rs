//! Union of country phone patterns into one alternation.
//!
//! A [`CombinedPattern`] keeps the list of sub-pattern sources it was
//! built from, so combining it again splices those sources in flat and
//! the alternation never nests deeper than one level. The alternation
//! as a whole is bounded by [`Boundary::Digits`], which accepts exactly
//! what bounding each component separately would.
//!
//! Two ordering/lookup policies apply when selecting by country:
//! - registry order wins over the order the caller lists codes in;
//! - codes with no registered pattern are skipped, not rejected.

use super::boundary::{Boundary, BoundedRegex};
use super::country::{CountryCode, CountryPattern, CountryRegistry};
use crate::error::LinkResult;
use log::{debug, trace};

/// Country list used when the caller does not supply one.
pub const DEFAULT_COUNTRIES: &[CountryCode] = &[CountryCode::US];

/// One input to [`union`].
#[derive(Debug, Clone, Copy)]
pub enum PatternPart<'a> {
    /// A single country pattern.
    Country(&'a CountryPattern),
    /// An earlier union; its components are spliced in.
    Combined(&'a CombinedPattern),
    /// A raw pattern source.
    Source(&'a str),
}

impl<'a> From<&'a CountryPattern> for PatternPart<'a> {
    fn from(p: &'a CountryPattern) -> Self {
        Self::Country(p)
    }
}

impl<'a> From<&'a CombinedPattern> for PatternPart<'a> {
    fn from(p: &'a CombinedPattern) -> Self {
        Self::Combined(p)
    }
}

impl<'a> From<&'a str> for PatternPart<'a> {
    fn from(p: &'a str) -> Self {
        Self::Source(p)
    }
}

/// An alternation of pattern sources with its component list retained.
#[derive(Debug, Clone)]
pub struct CombinedPattern {
    regex: BoundedRegex,
    components: Vec<String>,
}

impl CombinedPattern {
    /// Compiles `(?:c1)|(?:c2)|...` from the given component sources.
    ///
    /// An empty list yields `(?:)`, which only ever matches the empty string.
    pub fn from_components(components: Vec<String>) -> LinkResult<Self> {
        let source = format!("(?:{})", components.join(")|(?:"));
        let regex = BoundedRegex::new(source, Boundary::Digits)?;
        trace!("Combined {} component(s) into phone pattern", components.len());
        Ok(Self { regex, components })
    }

    /// Sub-pattern sources in alternation order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Source text of the combined alternation.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &BoundedRegex {
        &self.regex
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns a new pattern with `more` appended after this one's components.
    pub fn combine<'a, I, P>(&'a self, more: I) -> LinkResult<CombinedPattern>
    where
        I: IntoIterator<Item = P>,
        P: Into<PatternPart<'a>>,
    {
        union(std::iter::once(PatternPart::Combined(self)).chain(more.into_iter().map(Into::into)))
    }
}

/// Unions atomic and already-combined patterns into one alternation.
///
/// Combined parts contribute their component lists, never their own
/// alternation source.
pub fn union<'a, I, P>(parts: I) -> LinkResult<CombinedPattern>
where
    I: IntoIterator<Item = P>,
    P: Into<PatternPart<'a>>,
{
    let mut components = Vec::new();
    for part in parts {
        match part.into() {
            PatternPart::Country(p) => components.push(p.as_str().to_string()),
            PatternPart::Combined(c) => components.extend(c.components.iter().cloned()),
            PatternPart::Source(s) => components.push(s.to_string()),
        }
    }
    CombinedPattern::from_components(components)
}

/// Builds the phone pattern for the requested country codes.
///
/// Walks the registry in its declaration order and keeps every entry
/// whose code appears anywhere in `countries`. Unknown codes contribute
/// nothing.
pub fn combined_pattern<I, S>(countries: I) -> LinkResult<CombinedPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    combined_pattern_in(CountryRegistry::global(), countries)
}

/// Same as [`combined_pattern`] against a specific registry.
pub fn combined_pattern_in<I, S>(
    registry: &CountryRegistry,
    countries: I,
) -> LinkResult<CombinedPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let requested: Vec<S> = countries.into_iter().collect();

    for code in &requested {
        if registry.get(code.as_ref()).is_none() {
            debug!("No phone pattern registered for '{}', skipping", code.as_ref());
        }
    }

    let selected: Vec<&CountryPattern> = registry
        .iter()
        .filter(|p| requested.iter().any(|code| code.as_ref() == p.code().as_str()))
        .collect();

    debug!(
        "Phone pattern covers {:?}",
        selected.iter().map(|p| p.code()).collect::<Vec<_>>()
    );
    union(selected)
}

/// Typed variant of [`combined_pattern`].
pub fn combined_pattern_for(countries: &[CountryCode]) -> LinkResult<CombinedPattern> {
    combined_pattern(countries.iter().map(|c| c.as_str()))
}

/// The phone pattern for [`DEFAULT_COUNTRIES`].
pub fn default_combined_pattern() -> LinkResult<CombinedPattern> {
    combined_pattern_for(DEFAULT_COUNTRIES)
}
