//! The diagnostic record produced for malformed bracket structure

use std::fmt;

use text_size::TextRange;

use super::codes::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A second location that explains a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

/// One structural problem in a PDDL document
///
/// Severity follows the code; see [`ErrorCode::severity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// The usual fix, phrased for an editor quick-info
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    /// Start a diagnostic for `code` at `range`
    pub fn builder(code: ErrorCode, range: TextRange) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder {
            error: SyntaxError {
                message: code.default_message().to_string(),
                range,
                code,
                severity: code.severity(),
                hint: None,
                related: Vec::new(),
            },
        }
    }
}

/// `error[E0201]: unclosed '(define'`
impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity.as_str(), self.code, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({})", hint)?;
        }
        Ok(())
    }
}

pub struct SyntaxErrorBuilder {
    error: SyntaxError,
}

impl SyntaxErrorBuilder {
    /// Replace the code's default message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.error.message = message.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.error.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.error.related.push(RelatedInfo {
            message: message.into(),
            range,
        });
        self
    }

    pub fn build(self) -> SyntaxError {
        self.error
    }
}
