//! Geographic coordinate detection.
//!
//! Recognizes decimal `lat, lng` pairs with latitude in [-90, 90] and
//! longitude in [-180, 180], e.g.:
//! - 40.7128, -74.0060
//! - -33.8688,151.2093
//! - +90.0, 180

use super::boundary::{Boundary, BoundedRegex};
use super::record::{Match, MatchConfig, MatchKind};
use crate::error::{LinkError, LinkResult};
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Source of the coordinate detection pattern.
pub const COORDINATE_PATTERN: &str = concat!(
    r"[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)",
    r",\s*",
    r"[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)",
);

/// Returns the compiled coordinate pattern.
///
/// [`Boundary::Decimal`] rejects a pair whose latitude starts inside a
/// longer number or whose longitude continues with more digits, so
/// `90.1, 0.0` yields nothing instead of its in-range tail `0.1, 0.0`.
pub fn coordinate_pattern() -> &'static BoundedRegex {
    static PATTERN: Lazy<BoundedRegex> = Lazy::new(|| {
        BoundedRegex::new(COORDINATE_PATTERN, Boundary::Decimal).expect("Valid coordinate regex")
    });
    &PATTERN
}

/// A latitude/longitude pair found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatLngMatch {
    matched_text: String,
    offset: usize,
    latlng: String,
}

impl LatLngMatch {
    /// Builds a match from an engine configuration value.
    pub fn from_config(config: &MatchConfig) -> LinkResult<Self> {
        if config.kind != MatchKind::LatLng {
            return Err(LinkError::KindMismatch {
                expected: MatchKind::LatLng,
                found: config.kind,
            });
        }

        let latlng = config.latlng.clone().ok_or(LinkError::MissingField {
            kind: MatchKind::LatLng,
            field: MatchKind::LatLng.payload_field(),
        })?;

        Ok(Self {
            matched_text: config.matched_text.clone(),
            offset: config.offset,
            latlng,
        })
    }

    /// The coordinate text, verbatim.
    pub fn lat_lng(&self) -> &str {
        &self.latlng
    }

    /// Parses the payload into `(latitude, longitude)` degrees.
    ///
    /// Returns `None` when the payload was not produced by the coordinate
    /// pattern and does not split into two decimals.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lng) = self.latlng.split_once(',')?;
        let lat = lat.trim().parse().ok()?;
        let lng = lng.trim().parse().ok()?;
        Some((lat, lng))
    }
}

impl Match for LatLngMatch {
    fn match_type(&self) -> MatchKind {
        MatchKind::LatLng
    }

    fn matched_text(&self) -> &str {
        &self.matched_text
    }

    fn offset(&self) -> usize {
        self.offset
    }

    // Coordinates carry no scheme; the renderer decides how to link them.
    fn anchor_href(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.latlng)
    }

    fn anchor_text(&self) -> &str {
        &self.latlng
    }
}
