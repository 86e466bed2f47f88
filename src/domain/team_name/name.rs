//! Team name canonicalization

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;

const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Errors that can occur while turning a raw name into a [`TeamName`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamNameError {
    #[error("No name supplied")]
    Empty,

    #[error("Team name cannot exceed {0} characters")]
    TooLong(usize),
}

impl From<TeamNameError> for DomainError {
    fn from(err: TeamNameError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Whitespace as understood by the name rules: the ASCII set only.
fn is_name_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || is_name_whitespace(c)
}

/// Canonicalize a raw team name.
///
/// Trims surrounding whitespace, replaces every character outside
/// `[A-Za-z0-9_-]` and whitespace with `_`, title-cases each word and
/// collapses whitespace runs into a single space. A letter starts a word when
/// it is not preceded by another letter, so `"fast__hombres"` becomes
/// `"Fast__Hombres"`.
///
/// The result may be empty; use [`TeamName::parse`] to get a validated name.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(is_name_whitespace);
    let mut out = String::with_capacity(trimmed.len());
    let mut after_letter = false;
    let mut in_whitespace = false;

    for c in trimmed.chars() {
        let c = if is_allowed(c) { c } else { '_' };

        if is_name_whitespace(c) {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            after_letter = false;
            continue;
        }

        in_whitespace = false;

        if c.is_ascii_alphabetic() {
            out.push(if after_letter {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            });
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }

    out
}

/// A canonical team name. Only obtainable through canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Canonicalize `raw` and validate the result
    pub fn parse(raw: &str) -> Result<Self, TeamNameError> {
        let canonical = canonicalize(raw);

        if canonical.is_empty() {
            return Err(TeamNameError::Empty);
        }

        if canonical.len() > MAX_TEAM_NAME_LENGTH {
            return Err(TeamNameError::TooLong(MAX_TEAM_NAME_LENGTH));
        }

        Ok(Self(canonical))
    }

    /// Canonicalize an entry already held by the remote list.
    ///
    /// Only entries that canonicalize to nothing are rejected. The length cap
    /// applies to new names, not to entries someone else has stored.
    pub fn from_stored(entry: &str) -> Option<Self> {
        let canonical = canonicalize(entry);
        (!canonical.is_empty()).then_some(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of an availability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub team_name: TeamName,
    pub available: bool,
}
