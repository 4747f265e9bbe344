//! Match records and the uniform contract every entity kind implements.
//!
//! The autolinking engine only ever talks to [`Match`]; it never needs to
//! know whether a record came from the coordinate or the phone matcher.

use super::{LatLngMatch, PhoneMatch};
use std::borrow::Cow;
use strum::{AsRefStr, Display, EnumString};

/// Entity kinds this crate can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum MatchKind {
    #[strum(serialize = "latlng")]
    LatLng,
    #[strum(serialize = "phone")]
    Phone,
}

impl MatchKind {
    /// Name of the raw payload field a [`MatchConfig`] of this kind must carry.
    pub fn payload_field(self) -> &'static str {
        match self {
            Self::LatLng => "latlng",
            Self::Phone => "phone",
        }
    }
}

/// Configuration value handed to a match-object factory.
///
/// Mirrors what the engine knows about one detected span: the exact
/// substring, where it sits, and the kind-specific raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub kind: MatchKind,
    pub matched_text: String,
    pub offset: usize,
    pub latlng: Option<String>,
    pub phone: Option<String>,
}

impl MatchConfig {
    /// Creates a configuration with no payload fields set.
    pub fn new(kind: MatchKind, matched_text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            matched_text: matched_text.into(),
            offset,
            latlng: None,
            phone: None,
        }
    }

    /// Creates a configuration whose payload field is the matched text itself.
    pub fn for_match(kind: MatchKind, matched_text: &str, offset: usize) -> Self {
        let config = Self::new(kind, matched_text, offset);
        match kind {
            MatchKind::LatLng => config.with_latlng(matched_text),
            MatchKind::Phone => config.with_phone(matched_text),
        }
    }

    pub fn with_latlng(mut self, latlng: impl Into<String>) -> Self {
        self.latlng = Some(latlng.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Contract the autolinking engine relies on to render any match.
pub trait Match {
    /// Kind tag of this match.
    fn match_type(&self) -> MatchKind;

    /// Exact substring consumed from the source text.
    fn matched_text(&self) -> &str;

    /// Byte offset of the match in the source text.
    fn offset(&self) -> usize;

    /// Target the rendered anchor should point at.
    fn anchor_href(&self) -> Cow<'_, str>;

    /// Label the rendered anchor should display.
    fn anchor_text(&self) -> &str;

    /// Byte offset one past the end of the match.
    fn end(&self) -> usize {
        self.offset() + self.matched_text().len()
    }
}

/// A detected entity of any supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRecord {
    LatLng(LatLngMatch),
    Phone(PhoneMatch),
}

impl MatchRecord {
    pub fn as_lat_lng(&self) -> Option<&LatLngMatch> {
        match self {
            Self::LatLng(m) => Some(m),
            Self::Phone(_) => None,
        }
    }

    pub fn as_phone(&self) -> Option<&PhoneMatch> {
        match self {
            Self::Phone(m) => Some(m),
            Self::LatLng(_) => None,
        }
    }

    fn inner(&self) -> &dyn Match {
        match self {
            Self::LatLng(m) => m,
            Self::Phone(m) => m,
        }
    }
}

impl Match for MatchRecord {
    fn match_type(&self) -> MatchKind {
        self.inner().match_type()
    }

    fn matched_text(&self) -> &str {
        self.inner().matched_text()
    }

    fn offset(&self) -> usize {
        self.inner().offset()
    }

    fn anchor_href(&self) -> Cow<'_, str> {
        self.inner().anchor_href()
    }

    fn anchor_text(&self) -> &str {
        self.inner().anchor_text()
    }
}

impl From<LatLngMatch> for MatchRecord {
    fn from(m: LatLngMatch) -> Self {
        Self::LatLng(m)
    }
}

impl From<PhoneMatch> for MatchRecord {
    fn from(m: PhoneMatch) -> Self {
        Self::Phone(m)
    }
}
