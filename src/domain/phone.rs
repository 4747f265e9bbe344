//! Phone number match objects.
//!
//! Detection lives in the country registry and the combinator; this
//! module only turns a detected span into a linkable record.

use super::record::{Match, MatchConfig, MatchKind};
use crate::error::{LinkError, LinkResult};
use std::borrow::Cow;

/// Scheme prefixed to a phone number to form the anchor target.
pub const TEL_SCHEME: &str = "tel:";

/// A phone number found in text.
///
/// The number is kept exactly as written: no digit normalization, the
/// punctuation of the source text survives into both href and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMatch {
    matched_text: String,
    offset: usize,
    number: String,
}

impl PhoneMatch {
    /// Builds a match from an engine configuration value.
    ///
    /// Fails when the configuration belongs to another kind or has no
    /// `phone` payload.
    pub fn from_config(config: &MatchConfig) -> LinkResult<Self> {
        if config.kind != MatchKind::Phone {
            return Err(LinkError::KindMismatch {
                expected: MatchKind::Phone,
                found: config.kind,
            });
        }

        let number = config.phone.clone().ok_or(LinkError::MissingField {
            kind: MatchKind::Phone,
            field: MatchKind::Phone.payload_field(),
        })?;

        Ok(Self {
            matched_text: config.matched_text.clone(),
            offset: config.offset,
            number,
        })
    }

    /// The phone number payload, verbatim.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Match for PhoneMatch {
    fn match_type(&self) -> MatchKind {
        MatchKind::Phone
    }

    fn matched_text(&self) -> &str {
        &self.matched_text
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn anchor_href(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}{}", TEL_SCHEME, self.number))
    }

    fn anchor_text(&self) -> &str {
        &self.matched_text
    }
}
