//! # pddl-syntax
//!
//! Front end for PDDL documents: a lossless lexer, a tolerant syntax tree
//! builder, and the node queries that model extraction, grounding and
//! reference finding are built on.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → SyntaxTree arena, SyntaxNode/BracketNode queries, scopes, sections
//!   ↓
//! parser    → Logos lexer, keyword tables, tree builder, diagnostics
//! ```
//!
//! ```
//! use pddl_syntax::{parse, TextSize};
//!
//! let text = "(define (domain d) (:action a :parameters (?x) :effect (p ?x)))";
//! let tree = parse(text);
//! let usage = tree.node_at(TextSize::new(59));
//! let scope = usage.find_parametrisable_scope("x").unwrap();
//! assert_eq!(scope.token().text, "(:action");
//! ```

/// Lexer, tree builder, keyword tables, diagnostics
pub mod parser;

/// Syntax tree, node handles, scope resolution, document structure
pub mod syntax;

pub use parser::{BuildOptions, Lexer, SyntaxKind, Token, TreeBuilder, build_tree, parse, tokenize};
pub use syntax::{BracketNode, DocumentKind, NodeError, NodeId, SyntaxNode, SyntaxTree};

pub use text_size::{TextRange, TextSize};
