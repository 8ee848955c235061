//! Parameter scope resolution
//!
//! PDDL has no declarations outside the constructs that bind `?parameters`:
//! actions, processes, events, derived predicates and the quantifiers. A
//! parameter is visible inside the nearest such construct whose parameter
//! list declares it, so resolution is a walk up the tree.

use super::node::{BracketNode, SyntaxNode};
use crate::parser::SyntaxKind;
use crate::parser::keywords::{is_action_like_form, is_parametrisable_form};

impl<'t> SyntaxNode<'t> {
    /// Every parameter-introducing construct enclosing this node, nearest first
    ///
    /// The node itself counts when it is such a construct.
    pub fn find_all_parametrisable_scopes(&self) -> Vec<BracketNode<'t>> {
        std::iter::once(*self)
            .chain(self.ancestors())
            .filter_map(|node| node.as_bracket())
            .filter(|bracket| bracket.is_parametrisable())
            .collect()
    }

    /// The construct that declares `?name` for this node
    ///
    /// `name` may be given with or without its `?`. When no enclosing construct
    /// declares it, the nearest parametrisable construct is returned, and
    /// without one the nearest enclosing bracket. `None` only for nodes not
    /// enclosed by any bracket.
    pub fn find_parametrisable_scope(&self, name: &str) -> Option<SyntaxNode<'t>> {
        let scopes = self.find_all_parametrisable_scopes();
        if let Some(scope) = scopes.iter().find(|scope| scope.declares_parameter(name)) {
            return Some(scope.node());
        }
        if let Some(nearest) = scopes.first() {
            tracing::trace!(
                parameter = name,
                scope = %nearest.token().text,
                "no declaring scope, using nearest parametrisable construct"
            );
            return Some(nearest.node());
        }
        let enclosing = self.expand();
        (!enclosing.is_root()).then_some(enclosing)
    }
}

impl<'t> BracketNode<'t> {
    /// `:action`, `:durative-action`, `:process`, `:event`, `:derived`,
    /// `forall`, `sumall` or `exists`
    pub fn is_parametrisable(&self) -> bool {
        self.kind() == SyntaxKind::OPEN_BRACKET_OPERATOR && is_parametrisable_form(&self.token().text)
    }

    /// The bracket listing this construct's parameters
    ///
    /// Under `:parameters` for action-like forms, otherwise the first nested
    /// bracket: `(forall (?x - t) ...)`, `(:derived (p ?x) ...)`.
    pub fn parameter_definition(&self) -> Option<BracketNode<'t>> {
        if !self.is_parametrisable() {
            return None;
        }
        if is_action_like_form(&self.token().text) {
            self.keyword_open_bracket("parameters")
        } else {
            self.nested_children().find_map(|c| c.as_bracket())
        }
    }

    /// Parameter tokens declared by this construct, `?` included
    pub fn declared_parameters(&self) -> Vec<&'t str> {
        let Some(definition) = self.parameter_definition() else {
            return Vec::new();
        };
        definition
            .nested_children()
            .filter(|c| c.kind() == SyntaxKind::PARAMETER)
            .map(|c| c.token().text.as_str())
            .collect()
    }

    pub fn declares_parameter(&self, name: &str) -> bool {
        let name = name.strip_prefix('?').unwrap_or(name);
        self.declared_parameters()
            .iter()
            .any(|declared| declared[1..].eq_ignore_ascii_case(name))
    }
}
