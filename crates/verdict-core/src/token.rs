//! Token normalization for grading comparisons
//!
//! Every comparison in the grading engine happens on canonicalized tokens:
//! upper-cased text, with missing or empty input collapsed into [`Token::Absent`].

use std::fmt;

/// A canonicalized indicator token.
///
/// `Absent` is the "no specific indicator" sentinel. It is a distinct state of
/// the sum type, never equal to any real token, and matches only another
/// `Absent` - used when the fault itself, not a sub-indicator, is the target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// No indicator supplied (missing or empty in the source data)
    Absent,
    /// A concrete indicator, upper-cased
    Value(String),
}

impl Token {
    /// Canonicalize a raw token from source data.
    ///
    /// Missing or empty input maps to `Absent`; anything else is upper-cased.
    /// Pure and total - never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Token::Absent,
            Some(value) => Token::Value(value.to_uppercase()),
        }
    }

    /// The concrete token text, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Absent => None,
            Token::Value(value) => Some(value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Token::Absent)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Absent => Ok(()),
            Token::Value(value) => write!(f, "{}", value),
        }
    }
}
