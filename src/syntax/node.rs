//! Syntax node handles
//!
//! A [`SyntaxNode`] is a cheap `Copy` handle: a tree reference plus a
//! [`NodeId`]. Every query here is a pure read over the built tree.

use std::fmt;
use std::ops::Deref;

use regex::Regex;
use text_size::{TextRange, TextSize};

use super::error::NodeError;
use super::tree::{NodeData, NodeId, SyntaxTree};
use crate::parser::keywords::bracket_keyword;
use crate::parser::{SyntaxKind, Token};

/// A node of a [`SyntaxTree`], wrapping exactly one token
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}@{:?} {:?}",
            self.kind(),
            self.range(),
            self.token().text
        )
    }
}

impl<'t> SyntaxNode<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data(&self) -> &'t NodeData {
        self.tree.data(self.id)
    }

    fn wrap(&self, id: NodeId) -> SyntaxNode<'t> {
        SyntaxNode::new(self.tree, id)
    }

    // =========================================================================
    // Identity and span
    // =========================================================================

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn token(&self) -> &'t Token {
        &self.data().token
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().token.kind
    }

    /// Start of this node's own token
    pub fn start(&self) -> TextSize {
        self.data().token.start()
    }

    /// End of the last token in this subtree
    pub fn end(&self) -> TextSize {
        self.data().end
    }

    /// Source span of the subtree
    ///
    /// A stray `)` is kept out of the tree but not out of the span: in
    /// `x :a y ) z` the `:a` scope runs to the end of `z`. Only spans that
    /// enclose no offending token slice back to [`text`](Self::text).
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start(), self.end())
    }

    pub fn is_root(&self) -> bool {
        self.kind() == SyntaxKind::DOCUMENT
    }

    pub fn is_kind(&self, kind: SyntaxKind) -> bool {
        self.kind() == kind
    }

    pub fn is_any_of(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.kind())
    }

    pub fn as_bracket(&self) -> Option<BracketNode<'t>> {
        self.kind().is_open_bracket().then_some(BracketNode(*self))
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        self.data().parent.map(|id| self.wrap(id))
    }

    /// Strict ancestors, nearest first, ending with the root
    pub fn ancestors(&self) -> Ancestors<'t> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// All children, a bracket's close token included
    pub fn children(&self) -> Children<'t> {
        Children {
            tree: self.tree,
            ids: self.data().children.iter(),
            skip: None,
        }
    }

    /// Children without a bracket's close token
    pub fn nested_children(&self) -> Children<'t> {
        Children {
            tree: self.tree,
            ids: self.data().children.iter(),
            skip: self.data().close,
        }
    }

    pub fn has_children(&self) -> bool {
        self.nested_children().next().is_some()
    }

    pub fn non_whitespace_children(&self) -> Vec<SyntaxNode<'t>> {
        self.nested_children()
            .filter(|c| c.kind() != SyntaxKind::WHITESPACE)
            .collect()
    }

    pub fn non_whitespace_non_comment_children(&self) -> Vec<SyntaxNode<'t>> {
        self.nested_children()
            .filter(|c| !c.kind().is_trivia())
            .collect()
    }

    /// The only nested child; anything else is a caller error
    pub fn single_child(&self) -> Result<SyntaxNode<'t>, NodeError> {
        self.exactly_one(self.nested_children().collect())
    }

    /// The only non-whitespace nested child; anything else is a caller error
    pub fn single_non_whitespace_child(&self) -> Result<SyntaxNode<'t>, NodeError> {
        self.exactly_one(self.non_whitespace_children())
    }

    fn exactly_one(&self, children: Vec<SyntaxNode<'t>>) -> Result<SyntaxNode<'t>, NodeError> {
        match children.as_slice() {
            [only] => Ok(*only),
            _ => Err(NodeError::ExpectedSingleChild {
                kind: self.kind(),
                range: self.range(),
                found: children.len(),
            }),
        }
    }

    /// First nested child of `kind` whose token text matches `pattern`
    pub fn first_child(&self, kind: SyntaxKind, pattern: &Regex) -> Option<SyntaxNode<'t>> {
        self.nested_children()
            .find(|c| c.kind() == kind && pattern.is_match(&c.token().text))
    }

    pub fn first_child_or_err(
        &self,
        kind: SyntaxKind,
        pattern: &Regex,
    ) -> Result<SyntaxNode<'t>, NodeError> {
        self.first_child(kind, pattern)
            .ok_or_else(|| NodeError::MissingChild {
                kind,
                pattern: pattern.as_str().to_string(),
                range: self.range(),
            })
    }

    pub fn children_of_kind(&self, kind: SyntaxKind, pattern: &Regex) -> Vec<SyntaxNode<'t>> {
        self.nested_children()
            .filter(|c| c.kind() == kind && pattern.is_match(&c.token().text))
            .collect()
    }

    /// First nested `OPEN_BRACKET_OPERATOR` child for `keyword`, e.g. `":types"`
    ///
    /// Matches `(\s*keyword$` case-insensitively.
    pub fn first_open_bracket(&self, keyword: &str) -> Option<BracketNode<'t>> {
        self.nested_children()
            .filter(|c| c.kind() == SyntaxKind::OPEN_BRACKET_OPERATOR)
            .find(|c| bracket_keyword(&c.token().text).eq_ignore_ascii_case(keyword))
            .map(BracketNode)
    }

    pub fn first_open_bracket_or_err(&self, keyword: &str) -> Result<BracketNode<'t>, NodeError> {
        self.first_open_bracket(keyword)
            .ok_or_else(|| NodeError::MissingOpenBracket {
                keyword: keyword.to_string(),
                range: self.range(),
            })
    }

    /// The bracket nested under a `:keyword` child, e.g. `:parameters (?x)`
    ///
    /// `keyword` may be given with or without its leading `:`.
    pub fn keyword_open_bracket(&self, keyword: &str) -> Option<BracketNode<'t>> {
        let keyword = keyword.strip_prefix(':').unwrap_or(keyword);
        self.nested_children()
            .filter(|c| c.kind() == SyntaxKind::KEYWORD)
            .find(|c| {
                c.token()
                    .text
                    .strip_prefix(':')
                    .is_some_and(|k| k.eq_ignore_ascii_case(keyword))
            })?
            .nested_children()
            .find_map(|c| c.as_bracket())
    }

    /// First strict ancestor of `kind` whose token text matches `pattern`
    ///
    /// The document root is never returned.
    pub fn find_ancestor(&self, kind: SyntaxKind, pattern: &Regex) -> Option<SyntaxNode<'t>> {
        self.ancestors()
            .take_while(|a| !a.is_root())
            .find(|a| a.kind() == kind && pattern.is_match(&a.token().text))
    }

    /// Subtree nodes (self excluded) accepted by `predicate`, in pre-order
    pub fn descendants(&self, predicate: impl Fn(&SyntaxNode<'t>) -> bool) -> Vec<SyntaxNode<'t>> {
        let mut found = Vec::new();
        let mut stack: Vec<SyntaxNode<'t>> = self.children().collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if predicate(&node) {
                found.push(node);
            }
            let before = stack.len();
            stack.extend(node.children());
            stack[before..].reverse();
        }
        found
    }

    /// Nested siblings before this node, in source order
    pub fn preceding_siblings(&self) -> Vec<SyntaxNode<'t>> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };
        parent
            .nested_children()
            .take_while(|sibling| sibling.id != self.id)
            .collect()
    }

    /// Nested siblings after this node, in source order
    pub fn following_siblings(&self) -> Vec<SyntaxNode<'t>> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };
        parent
            .nested_children()
            .skip_while(|sibling| sibling.id != self.id)
            .skip(1)
            .collect()
    }

    /// The nearest bracket enclosing this node (itself if it is one), or the root
    pub fn expand(&self) -> SyntaxNode<'t> {
        let mut node = *self;
        while !node.is_root() && !node.kind().is_open_bracket() {
            match node.parent() {
                Some(parent) => node = parent,
                None => break,
            }
        }
        node
    }

    /// No nested child opens a bracket: `(p ?x)` yes, `(not (p))` no
    pub fn is_leaf_bracket(&self) -> bool {
        !self.nested_children().any(|c| c.kind().is_open_bracket())
    }

    // =========================================================================
    // Text reconstruction
    // =========================================================================

    /// Own token text, nested text and, for a closed bracket, the `)`
    ///
    /// Equal to the source under [`range`](Self::range) unless that range
    /// covers an offending `)`, which no node holds. Only the root and
    /// top-level keyword scopes can cover one.
    pub fn text(&self) -> String {
        let mut buf = String::new();
        self.write_text(&mut buf, TextMode::All);
        buf
    }

    /// Like [`text`](Self::text) with comments contributing nothing
    pub fn non_comment_text(&self) -> String {
        let mut buf = String::new();
        self.write_text(&mut buf, TextMode::SkipComments);
        buf
    }

    /// Text of the nested children only
    pub fn nested_text(&self) -> String {
        let mut buf = String::new();
        for child in self.nested_children() {
            child.write_text(&mut buf, TextMode::All);
        }
        buf
    }

    pub fn nested_non_comment_text(&self) -> String {
        let mut buf = String::new();
        for child in self.nested_children() {
            child.write_text(&mut buf, TextMode::SkipComments);
        }
        buf
    }

    fn write_text(&self, buf: &mut String, mode: TextMode) {
        if !(mode == TextMode::SkipComments && self.kind() == SyntaxKind::COMMENT) {
            buf.push_str(&self.token().text);
        }
        for child in self.children() {
            child.write_text(buf, mode);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TextMode {
    All,
    SkipComments,
}

/// A node whose token opens a bracket (`OPEN_BRACKET` or `OPEN_BRACKET_OPERATOR`)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BracketNode<'t>(SyntaxNode<'t>);

impl<'t> BracketNode<'t> {
    pub fn node(&self) -> SyntaxNode<'t> {
        self.0
    }

    /// The matching `)`, if one was found
    pub fn close_token(&self) -> Option<&'t Token> {
        let close = self.0.data().close?;
        Some(&self.0.tree.data(close).token)
    }

    pub fn is_closed(&self) -> bool {
        self.0.data().close.is_some()
    }

    /// Keyword of an operator bracket (`"(define"` gives `"define"`), or `""`
    pub fn keyword(&self) -> &'t str {
        match self.0.kind() {
            SyntaxKind::OPEN_BRACKET_OPERATOR => bracket_keyword(&self.0.token().text),
            _ => "",
        }
    }
}

impl<'t> Deref for BracketNode<'t> {
    type Target = SyntaxNode<'t>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for BracketNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)?;
        if !self.is_closed() {
            f.write_str(" (unclosed)")?;
        }
        Ok(())
    }
}

impl<'t> From<BracketNode<'t>> for SyntaxNode<'t> {
    fn from(bracket: BracketNode<'t>) -> Self {
        bracket.0
    }
}

/// Iterator over the children of a node
pub struct Children<'t> {
    tree: &'t SyntaxTree,
    ids: std::slice::Iter<'t, NodeId>,
    skip: Option<NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let skip = self.skip;
        let id = self.ids.by_ref().find(|&&id| Some(id) != skip)?;
        Some(SyntaxNode::new(self.tree, *id))
    }
}

/// Iterator over the strict ancestors of a node
pub struct Ancestors<'t> {
    next: Option<SyntaxNode<'t>>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}
