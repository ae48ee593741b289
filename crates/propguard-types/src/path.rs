use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed path into an error tree.
///
/// A path is an ordered sequence of segments. The text form joins segments with `.`
/// (`status.transition`); the empty path is the root and renders as an empty string.
///
/// Segments are lowercase ASCII letters, digits, `_` or `-`. Anything else is rejected
/// by [`ErrorPath::parse`] so paths from config and from checks share one vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorPath {
    segments: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePathError {
    #[error("empty segment in error path `{0}`")]
    EmptySegment(String),
    #[error("invalid character {ch:?} in error path `{path}`")]
    InvalidCharacter { path: String, ch: char },
}

impl ErrorPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from static segments. Used for the fixed check vocabulary.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ParsePathError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for seg in text.split('.') {
            if seg.is_empty() {
                return Err(ParsePathError::EmptySegment(text.to_string()));
            }
            if let Some(ch) = seg.chars().find(|c| !is_segment_char(*c)) {
                return Err(ParsePathError::InvalidCharacter {
                    path: text.to_string(),
                    ch,
                });
            }
            segments.push(seg.to_string());
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn child(&self, segment: &str) -> ErrorPath {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// `self` followed by every ancestor, ending at the root (closest first).
    pub fn ancestors(&self) -> impl Iterator<Item = ErrorPath> + '_ {
        (0..=self.segments.len())
            .rev()
            .map(move |n| Self {
                segments: self.segments[..n].to_vec(),
            })
    }

    /// True when `prefix` is `self` or one of its ancestors.
    pub fn starts_with(&self, prefix: &ErrorPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl TryFrom<String> for ErrorPath {
    type Error = ParsePathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ErrorPath::parse(&value)
    }
}

impl From<ErrorPath> for String {
    fn from(value: ErrorPath) -> Self {
        value.to_string()
    }
}
