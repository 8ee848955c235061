//! Arena-backed syntax tree
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! parent link is an index used for navigation only; ownership stays with the
//! tree. Nodes are allocated in token order, which makes arena order the
//! pre-order of the tree.

use text_size::{TextRange, TextSize};
use tracing::trace;

use super::error::NodeError;
use super::node::{BracketNode, SyntaxNode};
use super::structure::document_kind_of;
use crate::parser::Token;
use crate::parser::errors::{ErrorCode, SyntaxError};

/// Index of a node inside its [`SyntaxTree`]
///
/// Every node but the root holds a non-empty token ending at a `u32` offset,
/// so a tree never has more nodes than `u32` can index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        NodeId(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) token: Token,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Max end over the token and every descendant
    pub(crate) end: TextSize,
    /// The `)` child of a closed bracket
    pub(crate) close: Option<NodeId>,
}

/// Kind of PDDL document, read from the header inside `(define`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Domain,
    Problem,
    Unknown,
}

/// A built PDDL syntax tree
///
/// Immutable once the builder hands it out; safe to share between readers.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    offending: Vec<Token>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    /// A tree holding only the synthetic document root
    pub(crate) fn new() -> Self {
        let root = NodeData {
            token: Token::document(),
            parent: None,
            children: Vec::new(),
            end: TextSize::new(0),
            close: None,
        };
        Self {
            nodes: vec![root],
            offending: Vec::new(),
        }
    }

    // =========================================================================
    // Construction (tree builder only)
    // =========================================================================

    /// Attach `token` as the last child of `parent`
    pub(crate) fn attach(&mut self, parent: NodeId, token: Token) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let end = token.end();
        self.nodes.push(NodeData {
            token,
            parent: Some(parent),
            children: Vec::new(),
            end,
            close: None,
        });
        self.nodes[parent.index()].children.push(id);
        self.extend_end(parent, end);
        id
    }

    /// Record `token` as the close bracket of `bracket`
    pub(crate) fn close(&mut self, bracket: NodeId, token: Token) -> NodeId {
        let id = self.attach(bracket, token);
        self.nodes[bracket.index()].close = Some(id);
        id
    }

    pub(crate) fn push_offending(&mut self, token: Token) {
        self.offending.push(token);
    }

    fn extend_end(&mut self, from: NodeId, end: TextSize) {
        let mut current = Some(from);
        while let Some(id) = current {
            let data = &mut self.nodes[id.index()];
            if data.end >= end {
                break;
            }
            data.end = end;
            current = data.parent;
        }
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The synthetic `DOCUMENT` root
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self, NodeId::ROOT)
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        (id.index() < self.nodes.len()).then(|| SyntaxNode::new(self, id))
    }

    /// Number of nodes, the root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree built from empty input has only its root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Every node in pre-order, the root first
    pub fn nodes(&self) -> impl Iterator<Item = SyntaxNode<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| SyntaxNode::new(self, NodeId::from_index(i)))
    }

    /// The deepest node whose span contains the cursor position `offset`
    ///
    /// A cursor sits between characters, so a node `[start, end)` contains it
    /// when `start < offset <= end`: the position right after a token belongs
    /// to that token. Falls back to the root.
    pub fn node_at(&self, offset: TextSize) -> SyntaxNode<'_> {
        let mut current = NodeId::ROOT;
        loop {
            let children = &self.data(current).children;
            let after = children.partition_point(|&c| self.data(c).token.start() < offset);
            if after == 0 {
                break;
            }
            let candidate = children[after - 1];
            if self.data(candidate).end < offset {
                break;
            }
            current = candidate;
        }
        SyntaxNode::new(self, current)
    }

    /// Close brackets that had no open bracket to match
    pub fn offending_tokens(&self) -> &[Token] {
        &self.offending
    }

    /// Source text covered by the tree
    pub fn text(&self) -> String {
        self.root().text()
    }

    // =========================================================================
    // Document-level queries
    // =========================================================================

    /// The top-level `(define` bracket
    pub fn define_node(&self) -> Option<BracketNode<'_>> {
        self.root().first_open_bracket("define")
    }

    pub fn define_node_or_err(&self) -> Result<BracketNode<'_>, NodeError> {
        self.define_node().ok_or(NodeError::MissingDefine)
    }

    /// Whether this is a domain or a problem, by its `(domain`/`(problem` header
    pub fn document_kind(&self) -> DocumentKind {
        self.define_node()
            .map_or(DocumentKind::Unknown, |define| document_kind_of(&define))
    }

    /// Every bracket node that never met its `)`
    pub fn unclosed_brackets(&self) -> Vec<BracketNode<'_>> {
        self.nodes()
            .filter_map(|node| node.as_bracket())
            .filter(|bracket| !bracket.is_closed())
            .collect()
    }

    /// Structural diagnostics: stray `)` and unclosed `(`, in source order
    pub fn diagnostics(&self) -> Vec<SyntaxError> {
        let mut errors: Vec<SyntaxError> = self
            .offending
            .iter()
            .map(|token| {
                SyntaxError::builder(ErrorCode::E0202, token.range)
                    .hint("remove the extra ')' or add a matching '('")
                    .build()
            })
            .collect();

        for bracket in self.unclosed_brackets() {
            let content_end = TextRange::empty(bracket.end());
            errors.push(
                SyntaxError::builder(ErrorCode::E0201, bracket.token().range)
                    .message(format!("unclosed '{}'", bracket.token().text))
                    .hint("add ')' to close the bracket")
                    .related("bracket content ends here", content_end)
                    .build(),
            );
        }

        errors.sort_by_key(|e| e.range.start());
        for error in &errors {
            trace!(%error, "structural diagnostic");
        }
        errors
    }
}
