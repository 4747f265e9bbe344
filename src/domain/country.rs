//! Per-country phone number patterns.
//!
//! Every country except the US shares one template: an optional exit
//! code (`00`, `011`) or `+` followed by the calling code and an optional
//! trunk `0`, or a bare trunk `0`; then a national number in one of the
//! usual digit groupings; then an optional extension. The US keeps its
//! own simpler NANP shape. Every pattern is bounded by
//! [`Boundary::Digits`], so no number is cut out of a longer numeral.
//!
//! The registry iterates in [`CountryCode`] declaration order, and that
//! order decides alternation order when patterns are combined.

use super::boundary::{Boundary, BoundedRegex};
use crate::error::LinkResult;
use log::debug;
use once_cell::sync::Lazy;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Countries with a registered phone pattern, in registry order.
///
/// To add a country, append its ISO 3166-1 alpha-2 code here and give it
/// a calling code; it picks up the shared template automatically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
pub enum CountryCode {
    US,
    SE,
    GB,
    FR,
    PT,
    IE,
    DE,
}

impl CountryCode {
    /// ISO 3166-1 alpha-2 code.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// International calling code, without `+`.
    pub fn calling_code(self) -> &'static str {
        match self {
            Self::US => "1",
            Self::SE => "46",
            Self::GB => "44",
            Self::FR => "33",
            Self::PT => "351",
            Self::IE => "353",
            Self::DE => "49",
        }
    }

    /// Pattern source for this country's numbers.
    pub fn pattern_source(self) -> String {
        match self {
            Self::US => US_PATTERN.to_string(),
            other => NATIONAL_TEMPLATE.replace(CALLING_CODE_SLOT, other.calling_code()),
        }
    }
}

/// (123) 123-1234 or 123-123-1234, space or hyphen separated.
const US_PATTERN: &str = concat!(
    r"(?:\([0-9]{3}\)[\s-]|[0-9]{3}[\s-])",
    r"[0-9]{3}[\s-][0-9]{4}",
);

const CALLING_CODE_SLOT: &str = "{CC}";

const NATIONAL_TEMPLATE: &str = concat!(
    // exit code or '+', calling code, optional trunk 0 | bare trunk 0
    r"(?:(?:\(?(?:0(?:0|11)\)?[\s-]?\(?|\+)?(?:{CC})\)?[\s-]?(?:\(?0\)?[\s-]?)?)|(?:\(?0))",
    // 5+4/5, 4+5/6, 4+5 or 4+3+3, 3+3+3/4, 2+4+4
    r"(?:(?:[0-9]{5}\)?[\s-]?[0-9]{4,5})",
    r"|(?:[0-9]{4}\)?[\s-]?[0-9]{5,6})",
    r"|(?:[0-9]{4}\)?[\s-]?(?:[0-9]{5}|[0-9]{3}[\s-]?[0-9]{3}))",
    r"|(?:[0-9]{3}\)?[\s-]?[0-9]{3}[\s-]?[0-9]{3,4})",
    r"|(?:[0-9]{2}\)?[\s-]?[0-9]{4}[\s-]?[0-9]{4}))",
    r"(?:[\s-]?(?:x|ext\.?|#)[0-9]{3,4})?",
);

/// Compiled phone pattern for a single country.
#[derive(Debug, Clone)]
pub struct CountryPattern {
    code: CountryCode,
    regex: BoundedRegex,
}

impl CountryPattern {
    /// Compiles the pattern for `code`.
    pub fn new(code: CountryCode) -> LinkResult<Self> {
        let regex = BoundedRegex::new(code.pattern_source(), Boundary::Digits)?;
        Ok(Self { code, regex })
    }

    pub fn code(&self) -> CountryCode {
        self.code
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &BoundedRegex {
        &self.regex
    }

    /// Returns true if the text contains a number in this country's format.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Fixed table of country patterns.
#[derive(Debug)]
pub struct CountryRegistry {
    entries: Vec<CountryPattern>,
}

impl CountryRegistry {
    /// Builds a registry holding every [`CountryCode`].
    pub fn new() -> LinkResult<Self> {
        let entries = CountryCode::iter()
            .map(CountryPattern::new)
            .collect::<LinkResult<Vec<_>>>()?;
        debug!("Country registry built with {} pattern(s)", entries.len());
        Ok(Self { entries })
    }

    /// Process-wide registry, compiled on first use.
    pub fn global() -> &'static CountryRegistry {
        static REGISTRY: Lazy<CountryRegistry> =
            Lazy::new(|| CountryRegistry::new().expect("Valid country phone regexes"));
        &REGISTRY
    }

    /// Looks up the pattern registered for `code`.
    pub fn lookup(&self, code: CountryCode) -> Option<&CountryPattern> {
        self.entries.iter().find(|p| p.code == code)
    }

    /// Looks up by ISO alpha-2 string. Matching is exact and case-sensitive.
    pub fn get(&self, code: &str) -> Option<&CountryPattern> {
        code.parse().ok().and_then(|code| self.lookup(code))
    }

    /// Iterates patterns in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryPattern> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(code: CountryCode, text: &str) -> bool {
        let pattern = CountryRegistry::global().lookup(code).unwrap();
        pattern
            .regex()
            .find(text)
            .is_some_and(|m| m.offset == 0 && m.end() == text.len())
    }

    #[test]
    fn test_registry_order() {
        let codes: Vec<_> = CountryRegistry::global().iter().map(|p| p.code()).collect();
        assert_eq!(
            codes,
            vec![
                CountryCode::US,
                CountryCode::SE,
                CountryCode::GB,
                CountryCode::FR,
                CountryCode::PT,
                CountryCode::IE,
                CountryCode::DE,
            ]
        );
    }

    #[test]
    fn test_template_substitution() {
        let gb = CountryCode::GB.pattern_source();
        assert!(gb.contains("(?:44)"));
        assert!(!gb.contains(CALLING_CODE_SLOT));
        assert!(!gb.contains("(?<"));
        assert_eq!(
            CountryRegistry::global()
                .lookup(CountryCode::GB)
                .map(|p| p.regex().boundary()),
            Some(Boundary::Digits)
        );
    }

    #[test]
    fn test_us_formats() {
        assert!(full_match(CountryCode::US, "(415) 555-2671"));
        assert!(full_match(CountryCode::US, "415-555-2671"));
        assert!(full_match(CountryCode::US, "415 555 2671"));
        assert!(!full_match(CountryCode::US, "14155552671"));
    }

    #[test]
    fn test_national_formats() {
        assert!(full_match(CountryCode::GB, "+44 20 7946 0958"));
        assert!(full_match(CountryCode::GB, "020 7946 0958"));
        assert!(full_match(CountryCode::GB, "0044 20 7946 0958"));
        assert!(full_match(CountryCode::FR, "+33 123 456 789"));
        assert!(full_match(CountryCode::DE, "+49 30 1234 5678"));
        assert!(full_match(CountryCode::SE, "+46 70 1234 5678"));
        assert!(full_match(CountryCode::IE, "00353 1234 567 890"));
    }

    #[test]
    fn test_extension_suffix() {
        assert!(full_match(CountryCode::GB, "020 7946 0958 ext.123"));
        assert!(full_match(CountryCode::GB, "020 7946 0958 x1234"));
        assert!(full_match(CountryCode::GB, "020 7946 0958#123"));
    }

    #[test]
    fn test_no_match_inside_longer_numeral() {
        let gb = CountryRegistry::global().lookup(CountryCode::GB).unwrap();
        assert!(!gb.is_match("9020 7946 09581"));
    }

    #[test]
    fn test_lookup_by_string() {
        let registry = CountryRegistry::global();
        assert_eq!(registry.get("DE").map(|p| p.code()), Some(CountryCode::DE));
        assert!(registry.get("de").is_none());
        assert!(registry.get("JP").is_none());
        assert_eq!(registry.len(), 7);
    }
}
