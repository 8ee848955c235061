//! Lexer and tolerant tree builder for PDDL
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → lossless Tokens with SyntaxKind, `(` fused with operators
//!     ↓
//! TreeBuilder → SyntaxTree (arena, parent indices, offending tokens)
//!     ↓
//! SyntaxNode queries → scopes, sections, text reconstruction
//! ```
//!
//! A new edit means a new tree: nothing is patched in place.

pub mod errors;
pub mod keywords;
mod lexer;
mod options;
mod syntax_kind;
mod tree_builder;

pub use lexer::{Lexer, LogosToken, Token, tokenize};
pub use options::BuildOptions;
pub use syntax_kind::SyntaxKind;
pub use tree_builder::{TreeBuilder, build_tree, parse};
