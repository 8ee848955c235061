//! Errors for misuse of the syntax node query API
//!
//! Malformed input never produces these; they signal that a caller asked for
//! something its own contract guaranteed would be there.

use text_size::TextRange;
use thiserror::Error;

use crate::parser::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("expected exactly one child under {kind} at {range:?}, found {found}")]
    ExpectedSingleChild {
        kind: SyntaxKind,
        range: TextRange,
        found: usize,
    },

    #[error("no {kind} child matching `{pattern}` under node at {range:?}")]
    MissingChild {
        kind: SyntaxKind,
        pattern: String,
        range: TextRange,
    },

    #[error("no `({keyword}` bracket under node at {range:?}")]
    MissingOpenBracket { keyword: String, range: TextRange },

    #[error("document has no `(define` bracket")]
    MissingDefine,
}
