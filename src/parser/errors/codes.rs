//! Diagnostic codes for bracket structure
//!
//! Codes are `E02xx`, the structural range. The lexer accepts any input, so
//! no lexical range exists.

use std::fmt;

use super::error::Severity;

/// What went wrong with a document's bracket structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A `(` whose `)` never came
    E0201,
    /// A `)` with no `(` left to close
    E0202,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
        }
    }

    /// Message used when the diagnostic does not name the offending token
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0201 => "unclosed parenthesis",
            Self::E0202 => "unexpected closing parenthesis",
        }
    }

    /// An unclosed `(` swallows the rest of the document into one bracket.
    /// A stray `)` is dropped and leaves the tree intact.
    pub fn severity(&self) -> Severity {
        match self {
            Self::E0201 => Severity::Error,
            Self::E0202 => Severity::Warning,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
