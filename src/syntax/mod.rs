//! The PDDL syntax tree and its query API
//!
//! - [`SyntaxTree`] owns every node in an arena and answers document-level
//!   questions (node at offset, `define`, diagnostics).
//! - [`SyntaxNode`] and [`BracketNode`] are `Copy` handles for navigation,
//!   keyword-guarded lookups, text reconstruction and parameter scoping.
//! - [`structure`] knows the canonical section order of domains and problems.

mod error;
mod node;
mod scope;
pub mod structure;
mod tree;

pub use error::NodeError;
pub use node::{Ancestors, BracketNode, Children, SyntaxNode};
pub use tree::{DocumentKind, NodeId, SyntaxTree};
