//! Shared domain primitives for the acta composition engine.
//!
//! This crate holds the small validated types every other crate agrees on:
//! the attendee roster entry, the session kind, and a trimmed non-empty text
//! wrapper used wherever blank input would produce a nonsensical record.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,

    /// The input did not name a known session kind
    #[error("unrecognised session kind: {0}")]
    UnknownSessionKind(String),
}

/// A trimmed string guaranteed to contain at least one non-whitespace character.
///
/// Construction trims leading and trailing whitespace; a result that trims to
/// nothing is rejected rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A single roster entry for a council session.
///
/// Identity is positional: the roster index is the attendee's number in the
/// attendance table, and two entries may legitimately share a name. The core
/// never mutates an attendee; the `attended` flag is set by the caller before
/// composition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Attendee {
    pub name: String,
    pub title: String,
    pub attended: bool,
}

impl Attendee {
    /// Creates an attendee marked as present.
    pub fn present(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            attended: true,
        }
    }

    /// Creates an attendee marked as absent.
    pub fn absent(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            attended: false,
        }
    }
}

/// The kind of council session being recorded.
///
/// Rendered uppercase into the record header and opening clause.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Ordinaria,
    Extraordinaria,
    Solemne,
}

impl SessionKind {
    /// Returns the uppercase Spanish form used in the record text.
    pub fn as_record_str(&self) -> &'static str {
        match self {
            SessionKind::Ordinaria => "ORDINARIA",
            SessionKind::Extraordinaria => "EXTRAORDINARIA",
            SessionKind::Solemne => "SOLEMNE",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_record_str())
    }
}

impl std::str::FromStr for SessionKind {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordinaria" => Ok(SessionKind::Ordinaria),
            "extraordinaria" => Ok(SessionKind::Extraordinaria),
            "solemne" => Ok(SessionKind::Solemne),
            other => Err(TextError::UnknownSessionKind(other.to_string())),
        }
    }
}
