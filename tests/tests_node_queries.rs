//! Node Query Tests
//!
//! Child filtering, bracket lookups, ancestor search and text rendering.

use pddl_syntax::parser::{SyntaxKind, parse};
use pddl_syntax::{NodeError, SyntaxTree, TextSize};
use regex::Regex;
use rstest::rstest;

const DOMAIN: &str = "(define (domain logistics)
  (:requirements :strips :typing) ; needed for types
  (:types truck place)
  (:predicates (at ?t - truck ?p - place))
  (:action drive
    :parameters (?t - truck ?from ?to - place)
    :precondition (and (at ?t ?from) (not (at ?t ?to)))
    :effect (and (not (at ?t ?from)) (at ?t ?to))
  )
)";

fn domain() -> SyntaxTree {
    parse(DOMAIN)
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_children_include_close_bracket() {
    let tree = parse("(p a)");
    let bracket = tree.root().single_child().unwrap();
    let all: Vec<_> = bracket.children().map(|c| c.kind()).collect();
    let nested: Vec<_> = bracket.nested_children().map(|c| c.kind()).collect();
    assert_eq!(all.last(), Some(&SyntaxKind::CLOSE_BRACKET));
    assert_eq!(nested.len() + 1, all.len());
    assert!(!nested.contains(&SyntaxKind::CLOSE_BRACKET));
}

#[test]
fn test_non_whitespace_children() {
    let tree = parse("(p a ; note\n b)");
    let bracket = tree.root().single_child().unwrap();
    let texts: Vec<_> = bracket
        .non_whitespace_children()
        .iter()
        .map(|c| c.token().text.to_string())
        .collect();
    assert_eq!(texts, vec!["p", "a", "; note", "b"]);

    let texts: Vec<_> = bracket
        .non_whitespace_non_comment_children()
        .iter()
        .map(|c| c.token().text.to_string())
        .collect();
    assert_eq!(texts, vec!["p", "a", "b"]);
}

#[test]
fn test_has_children() {
    let tree = parse("() (p)");
    let brackets: Vec<_> = tree.root().non_whitespace_children();
    assert!(!brackets[0].has_children());
    assert!(brackets[1].has_children());
}

#[test]
fn test_single_child_errors() {
    let tree = parse("(p a b)");
    let bracket = tree.root().single_child().unwrap();
    let err = bracket.single_child().unwrap_err();
    assert!(matches!(err, NodeError::ExpectedSingleChild { found: 5, .. }));

    let err = bracket.single_non_whitespace_child().unwrap_err();
    assert!(matches!(err, NodeError::ExpectedSingleChild { found: 3, .. }));
}

#[test]
fn test_single_non_whitespace_child() {
    let tree = parse("(:domain  logistics )");
    let domain = tree.root().single_child().unwrap();
    let name = domain.single_non_whitespace_child().unwrap();
    assert_eq!(name.token().text, "logistics");
}

#[test]
fn test_siblings() {
    let tree = parse("(p a b c)");
    let bracket = tree.root().single_child().unwrap();
    let b = bracket
        .nested_children()
        .find(|c| c.token().text == "b")
        .unwrap();
    let before: Vec<_> = b.preceding_siblings().iter().map(|c| c.text()).collect();
    let after: Vec<_> = b.following_siblings().iter().map(|c| c.text()).collect();
    assert_eq!(before, vec!["p", " ", "a", " "]);
    assert_eq!(after, vec![" ", "c"]);
}

// ============================================================================
// Bracket lookups
// ============================================================================

#[rstest]
#[case(":requirements")]
#[case(":types")]
#[case(":predicates")]
#[case(":action")]
#[case(":ACTION")]
#[case("domain")]
fn test_first_open_bracket_found(#[case] keyword: &str) {
    let tree = domain();
    let define = tree.define_node().unwrap();
    assert!(define.first_open_bracket(keyword).is_some(), "{}", keyword);
}

#[rstest]
#[case(":functions")]
#[case("types")]
#[case(":act")]
fn test_first_open_bracket_missing(#[case] keyword: &str) {
    let tree = domain();
    let define = tree.define_node().unwrap();
    assert!(define.first_open_bracket(keyword).is_none());
    assert!(matches!(
        define.first_open_bracket_or_err(keyword),
        Err(NodeError::MissingOpenBracket { .. })
    ));
}

#[rstest]
#[case("parameters", "(?t - truck ?from ?to - place)")]
#[case(":parameters", "(?t - truck ?from ?to - place)")]
#[case("precondition", "(and (at ?t ?from) (not (at ?t ?to)))")]
#[case(":effect", "(and (not (at ?t ?from)) (at ?t ?to))")]
fn test_keyword_open_bracket(#[case] keyword: &str, #[case] expected: &str) {
    let tree = domain();
    let action = tree.define_node().unwrap().first_open_bracket(":action").unwrap();
    let bracket = action.keyword_open_bracket(keyword).unwrap();
    assert_eq!(bracket.text(), expected);
}

#[test]
fn test_keyword_open_bracket_without_bracket() {
    let tree = parse("(:requirements :strips :typing)");
    let requirements = tree.root().single_child().unwrap();
    assert!(requirements.keyword_open_bracket(":strips").is_none());
    assert!(requirements.keyword_open_bracket(":fluents").is_none());
}

#[test]
fn test_first_child_by_pattern() {
    let tree = domain();
    let requirements = tree
        .define_node()
        .unwrap()
        .first_open_bracket(":requirements")
        .unwrap();
    let pattern = Regex::new(r"^:typ").unwrap();
    let typing = requirements.first_child(SyntaxKind::KEYWORD, &pattern).unwrap();
    assert_eq!(typing.token().text, ":typing");

    let all = Regex::new(".").unwrap();
    assert_eq!(requirements.children_of_kind(SyntaxKind::KEYWORD, &all).len(), 2);

    let missing = Regex::new("^:fluents$").unwrap();
    assert!(matches!(
        requirements.first_child_or_err(SyntaxKind::KEYWORD, &missing),
        Err(NodeError::MissingChild { .. })
    ));
}

// ============================================================================
// Ancestors
// ============================================================================

#[test]
fn test_find_ancestor() {
    let tree = domain();
    let offset = TextSize::new(DOMAIN.find("?to)))").unwrap() as u32 + 1);
    let node = tree.node_at(offset);
    assert_eq!(node.token().text, "?to");

    let action = Regex::new("^\\(:action$").unwrap();
    let found = node.find_ancestor(SyntaxKind::OPEN_BRACKET_OPERATOR, &action).unwrap();
    assert_eq!(found.token().text, "(:action");

    let precondition = Regex::new("^:precondition$").unwrap();
    assert!(node.find_ancestor(SyntaxKind::KEYWORD, &precondition).is_some());

    let effect = Regex::new("^:effect$").unwrap();
    assert!(node.find_ancestor(SyntaxKind::KEYWORD, &effect).is_none());
}

#[test]
fn test_find_ancestor_never_returns_root() {
    let tree = parse("(p)");
    let p = tree.node_at(TextSize::new(2));
    let anything = Regex::new("").unwrap();
    assert!(p.find_ancestor(SyntaxKind::DOCUMENT, &anything).is_none());
}

#[test]
fn test_ancestors_end_at_root() {
    let tree = parse("(a (b (c)))");
    let c = tree.node_at(TextSize::new(8));
    let chain: Vec<_> = c.ancestors().map(|a| a.kind()).collect();
    assert_eq!(chain.len(), 4);
    assert_eq!(chain.last(), Some(&SyntaxKind::DOCUMENT));
}

#[test]
fn test_expand() {
    let tree = parse("(p ?x) top");
    let parameter = tree.node_at(TextSize::new(4));
    assert_eq!(parameter.expand().token().text, "(");

    let bracket = parameter.parent().unwrap();
    assert_eq!(bracket.expand(), bracket);

    let top = tree.node_at(TextSize::new(10));
    assert_eq!(top.token().text, "top");
    assert!(top.expand().is_root());
}

#[rstest]
#[case("(p)", true)]
#[case("(p ?x ?y)", true)]
#[case("(not (p))", false)]
#[case("(and (p) (q))", false)]
#[case("()", true)]
fn test_is_leaf_bracket(#[case] input: &str, #[case] expected: bool) {
    let tree = parse(input);
    let bracket = tree.root().single_child().unwrap();
    assert_eq!(bracket.is_leaf_bracket(), expected);
}

#[test]
fn test_descendants() {
    let tree = domain();
    let action = tree.define_node().unwrap().first_open_bracket(":action").unwrap();
    let parameters: Vec<_> = action
        .descendants(|n| n.kind() == SyntaxKind::PARAMETER)
        .iter()
        .map(|n| n.token().text.to_string())
        .collect();
    assert_eq!(parameters[..3], ["?t", "?from", "?to"]);
    assert_eq!(parameters.len(), 3 + 4 + 4);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_root_text_is_document() {
    assert_eq!(domain().text(), DOMAIN);
}

#[test]
fn test_non_comment_text() {
    let tree = parse("(p ; hidden\n a)");
    let bracket = tree.root().single_child().unwrap();
    assert_eq!(bracket.text(), "(p ; hidden\n a)");
    assert_eq!(bracket.non_comment_text(), "(p \n a)");
}

#[test]
fn test_nested_text() {
    let tree = parse("(:domain  logistics ; x\n)");
    let domain = tree.root().single_child().unwrap();
    assert_eq!(domain.nested_text(), "  logistics ; x\n");
    assert_eq!(domain.nested_non_comment_text(), "  logistics \n");
}

#[test]
fn test_unclosed_bracket_text() {
    let tree = parse("(and (p");
    let and = tree.root().single_child().unwrap();
    assert_eq!(and.text(), "(and (p");
    assert!(and.as_bracket().unwrap().close_token().is_none());
}
