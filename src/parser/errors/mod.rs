//! Structural diagnostics
//!
//! The tree builder never fails; malformed input is recorded in the tree.
//! This module holds the diagnostic records `SyntaxTree::diagnostics` turns
//! those into. Each carries a code and a severity derived from it, a hint for
//! the usual fix, and for unclosed brackets the place their content ends.

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder};
