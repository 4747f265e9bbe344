//! Boundary-checked regexes.
//!
//! Phone numbers and coordinates must not be carved out of a longer run
//! of digits. Rather than lookaround, each pattern body is compiled as
//!
//! ```text
//! (?:^|<before>)(<body>)(?:$|<after>)
//! ```
//!
//! and only capture group 1 is reported. The neighbouring characters are
//! consumed by the search but never by a reported span: the next search
//! resumes at the end of group 1, with the character just before the
//! resume point checked by hand. Leftmost-first priority is the same as
//! for the lookaround form, and matching stays linear in the input
//! length.

use crate::error::{LinkError, LinkResult};
use regex::Regex;

/// Characters that may not sit directly next to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// No ASCII digit immediately before or after.
    Digits,
    /// No digit or `.` before; no digit, and no `.` followed by a digit, after.
    Decimal,
}

impl Boundary {
    /// Whether `c` may directly precede a match.
    pub fn allows_before(self, c: char) -> bool {
        match self {
            Self::Digits => !c.is_ascii_digit(),
            Self::Decimal => !(c.is_ascii_digit() || c == '.'),
        }
    }

    fn before(self) -> &'static str {
        match self {
            Self::Digits => r"(?:^|[^0-9])",
            Self::Decimal => r"(?:^|[^0-9.])",
        }
    }

    fn after(self) -> &'static str {
        match self {
            Self::Digits => r"(?:$|[^0-9])",
            Self::Decimal => r"(?:$|[^.0-9]|\.(?:$|[^0-9]))",
        }
    }
}

/// A detected span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'t> {
    pub offset: usize,
    pub text: &'t str,
}

impl Span<'_> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A pattern body compiled together with its [`Boundary`].
#[derive(Debug, Clone)]
pub struct BoundedRegex {
    source: String,
    boundary: Boundary,
    regex: Regex,
    anchored: Regex,
}

impl BoundedRegex {
    /// Compiles `source` wrapped in the checks for `boundary`.
    pub fn new(source: impl Into<String>, boundary: Boundary) -> LinkResult<Self> {
        let source = source.into();
        let compile = |wrapped: String| {
            Regex::new(&wrapped).map_err(|e| LinkError::pattern(source.as_str(), &e))
        };
        let regex = compile(format!("{}({}){}", boundary.before(), source, boundary.after()))?;
        let anchored = compile(format!("^({}){}", source, boundary.after()))?;
        Ok(Self {
            source,
            boundary,
            regex,
            anchored,
        })
    }

    /// The pattern body, without boundary checks.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns true if `text` contains a bounded match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// First bounded match in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<Span<'t>> {
        self.find_at(text, 0)
    }

    /// First bounded match starting at or after byte `start`.
    ///
    /// Characters before `start` still count as neighbours.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Span<'t>> {
        // the unanchored form cannot start a body at `start` itself
        let prev = text[..start].chars().next_back();
        if prev.is_some_and(|c| self.boundary.allows_before(c)) {
            if let Some(m) = self.anchored.captures(&text[start..]).and_then(|c| c.get(1)) {
                return Some(Span {
                    offset: start + m.start(),
                    text: m.as_str(),
                });
            }
        }

        let m = self.regex.captures_at(text, start)?.get(1)?;
        Some(Span {
            offset: m.start(),
            text: m.as_str(),
        })
    }

    /// Successive non-overlapping bounded matches, empty ones included.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> BoundedMatches<'r, 't> {
        BoundedMatches {
            regex: self,
            text,
            pos: Some(0),
        }
    }
}

/// Iterator returned by [`BoundedRegex::find_iter`].
#[derive(Debug)]
pub struct BoundedMatches<'r, 't> {
    regex: &'r BoundedRegex,
    text: &'t str,
    pos: Option<usize>,
}

impl<'t> Iterator for BoundedMatches<'_, 't> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Span<'t>> {
        let span = self.regex.find_at(self.text, self.pos?)?;
        self.pos = if span.is_empty() {
            // step one character so an empty match cannot repeat
            self.text[span.offset..]
                .chars()
                .next()
                .map(|c| span.offset + c.len_utf8())
        } else {
            Some(span.end())
        };
        Some(span)
    }
}
