//! Tolerant syntax tree builder
//!
//! Consumes tokens one at a time and keeps a single cursor into the growing
//! tree. Each token either opens a scope (brackets, keywords), closes one
//! (close brackets, the next keyword at the same level), or is attached as a
//! leaf under the cursor.
//!
//! Nothing here fails on malformed input: a `)` without an open bracket is
//! recorded as offending, and an open bracket without its `)` simply stays
//! open. Both are visible to callers on the finished tree.

use text_size::TextSize;
use tracing::{debug, trace};

use super::lexer::{Lexer, Token};
use super::options::BuildOptions;
use super::syntax_kind::SyntaxKind;
use crate::syntax::{NodeId, SyntaxNode, SyntaxTree};

/// Build a syntax tree, optionally stopping at `target_offset`
pub fn build_tree(text: &str, target_offset: Option<TextSize>) -> SyntaxTree {
    let options = BuildOptions { target_offset };
    TreeBuilder::with_options(text, options).into_tree()
}

/// Build the syntax tree for a whole document
pub fn parse(text: &str) -> SyntaxTree {
    TreeBuilder::new(text).into_tree()
}

/// The builder state after a pass over the input
///
/// Kept around (rather than just the tree) so that the cursor position can
/// be reported as breadcrumbs.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    cursor: NodeId,
}

impl TreeBuilder {
    pub fn new(text: &str) -> Self {
        Self::with_options(text, BuildOptions::default())
    }

    pub fn with_options(text: &str, options: BuildOptions) -> Self {
        let mut builder = Self {
            tree: SyntaxTree::new(),
            cursor: NodeId::ROOT,
        };

        for token in Lexer::new(text) {
            if !options.accepts(token.start()) {
                trace!(start = ?token.start(), "target offset reached, stopping");
                break;
            }
            builder.push(token);
        }

        debug!(
            nodes = builder.tree.len(),
            offending = builder.tree.offending_tokens().len(),
            "built syntax tree"
        );
        builder
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn into_tree(self) -> SyntaxTree {
        self.tree
    }

    /// Close brackets that matched no open bracket
    pub fn offending_tokens(&self) -> &[Token] {
        self.tree.offending_tokens()
    }

    /// Where the builder stopped: the innermost scope still being built
    pub fn cursor(&self) -> SyntaxNode<'_> {
        // the cursor is always an id handed out by this tree
        SyntaxNode::new(&self.tree, self.cursor)
    }

    /// Tokens enclosing `offset` from the root down, or enclosing the
    /// builder's cursor when no offset is given
    pub fn breadcrumbs(&self, offset: Option<TextSize>) -> Vec<&Token> {
        let node = match offset {
            Some(offset) => self.tree.node_at(offset),
            None => self.cursor(),
        };
        let mut chain: Vec<&Token> = std::iter::once(node)
            .chain(node.ancestors())
            .map(|n| n.token())
            .collect();
        chain.reverse();
        chain
    }

    // =========================================================================
    // Token handling
    // =========================================================================

    fn push(&mut self, token: Token) {
        match token.kind {
            SyntaxKind::KEYWORD => {
                self.close_keyword();
                self.cursor = self.tree.attach(self.cursor, token);
            }
            SyntaxKind::CLOSE_BRACKET => self.close_bracket(token),
            SyntaxKind::OTHER
            | SyntaxKind::COMMENT
            | SyntaxKind::PARAMETER
            | SyntaxKind::DASH
            | SyntaxKind::WHITESPACE
            | SyntaxKind::OPEN_BRACKET
            | SyntaxKind::OPEN_BRACKET_OPERATOR => {
                self.close_leaf();
                self.cursor = self.tree.attach(self.cursor, token);
            }
            // the lexer never produces the root kind
            SyntaxKind::DOCUMENT => {}
        }
    }

    fn kind_of(&self, id: NodeId) -> SyntaxKind {
        self.tree.data(id).token.kind
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.tree.data(id).parent
    }

    /// Leaves cannot have children; step off one before attaching
    fn close_leaf(&mut self) {
        if self.kind_of(self.cursor).is_leaf() {
            if let Some(parent) = self.parent_of(self.cursor) {
                self.cursor = parent;
            }
        }
    }

    /// End the scope of the previous keyword at this bracket level
    ///
    /// Walks up to the nearest keyword, open bracket, or the root. A keyword
    /// found first is closed; otherwise the cursor rests on what was found.
    fn close_keyword(&mut self) {
        let mut node = self.cursor;
        loop {
            match self.kind_of(node) {
                SyntaxKind::KEYWORD => {
                    self.cursor = self.parent_of(node).unwrap_or(NodeId::ROOT);
                    return;
                }
                kind if kind.is_open_bracket() || kind == SyntaxKind::DOCUMENT => {
                    self.cursor = node;
                    return;
                }
                _ => match self.parent_of(node) {
                    Some(parent) => node = parent,
                    None => {
                        self.cursor = node;
                        return;
                    }
                },
            }
        }
    }

    /// Match `token` with the nearest open bracket above the cursor
    fn close_bracket(&mut self, token: Token) {
        let mut node = Some(self.cursor);
        while let Some(id) = node {
            if self.kind_of(id).is_open_bracket() {
                self.tree.close(id, token);
                self.cursor = self.parent_of(id).unwrap_or(NodeId::ROOT);
                return;
            }
            node = self.parent_of(id);
        }
        trace!(range = ?token.range, "close bracket without open bracket");
        self.tree.push_offending(token);
    }
}
