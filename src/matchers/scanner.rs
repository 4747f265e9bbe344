//! Scan driver that runs a matcher set over text.
//!
//! Plays the engine's side of the matcher contract: global search per
//! matcher, one [`MatchConfig`] per detected span, factory invocation,
//! and left-to-right ordering. It does no rendering.

use super::{matchers_with, EntityMatcher, MatcherOptions, Span};
use crate::domain::{Match, MatchConfig, MatchRecord};
use crate::error::LinkResult;
use log::{debug, trace};
use std::cmp::Reverse;

/// Runs registered matchers over text and collects match records.
pub struct LinkScanner {
    matchers: Vec<Box<dyn EntityMatcher>>,
}

impl LinkScanner {
    /// Creates a scanner over the given matchers. Registration order breaks ties.
    pub fn new(matchers: Vec<Box<dyn EntityMatcher>>) -> Self {
        Self { matchers }
    }

    /// Creates a scanner with the coordinate and all-country phone matchers.
    pub fn with_default_matchers() -> LinkResult<Self> {
        Self::with_options(&MatcherOptions::default())
    }

    pub fn with_options(options: &MatcherOptions) -> LinkResult<Self> {
        matchers_with(options).map(Self::new)
    }

    pub fn matchers(&self) -> &[Box<dyn EntityMatcher>] {
        &self.matchers
    }

    /// Scans `text` and returns non-overlapping matches ordered by offset.
    ///
    /// When spans of different matchers overlap, the earlier start wins,
    /// then the longer span, then the matcher registered first. Only a
    /// matcher's factory can fail; detection itself is total.
    pub fn scan(&self, text: &str) -> LinkResult<Vec<MatchRecord>> {
        let mut candidates: Vec<(usize, Span<'_>)> = Vec::new();
        for (index, matcher) in self.matchers.iter().enumerate() {
            let spans = matcher.find_all(text);
            trace!("{} matcher found {} span(s)", matcher.kind(), spans.len());
            candidates.extend(spans.into_iter().map(|span| (index, span)));
        }

        candidates.sort_by_key(|(index, span)| (span.offset, Reverse(span.text.len()), *index));

        let mut records: Vec<MatchRecord> = Vec::with_capacity(candidates.len());
        let mut cursor = 0;
        for (index, span) in candidates {
            if span.offset < cursor {
                continue;
            }
            let matcher = &self.matchers[index];
            let config = MatchConfig::for_match(matcher.kind(), span.text, span.offset);
            let record = matcher.build(&config)?;
            cursor = record.end();
            records.push(record);
        }

        debug!("Scanned {} byte(s), {} match(es)", text.len(), records.len());
        Ok(records)
    }
}

impl std::fmt::Debug for LinkScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<_> = self.matchers.iter().map(|m| m.kind()).collect();
        f.debug_struct("LinkScanner").field("matchers", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchKind;
    use crate::matchers::{LatLngMatcher, PhoneMatcher};

    #[test]
    fn test_mixed_text_ordered() {
        let scanner = LinkScanner::with_default_matchers().unwrap();
        let text = "Meet at 40.7128, -74.0060 or call (415) 555-2671.";
        let records = scanner.scan(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].match_type(), MatchKind::LatLng);
        assert_eq!(records[0].matched_text(), "40.7128, -74.0060");
        assert_eq!(records[1].match_type(), MatchKind::Phone);
        assert_eq!(records[1].anchor_href(), "tel:(415) 555-2671");
        assert_eq!(&text[records[1].offset()..records[1].end()], "(415) 555-2671");
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let phone = PhoneMatcher::for_countries(["US"]).unwrap();
        let scanner = LinkScanner::new(vec![Box::new(phone.clone()), Box::new(phone)]);
        let records = scanner.scan("415-555-2671").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_no_matches() {
        let scanner = LinkScanner::new(vec![Box::new(LatLngMatcher)]);
        assert!(scanner.scan("nothing to see here").unwrap().is_empty());
        assert!(scanner.scan("").unwrap().is_empty());
    }
}
