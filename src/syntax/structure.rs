//! Canonical section layout of PDDL documents
//!
//! Domains and problems list their sections in a fixed order. Collaborators
//! that insert a missing section (or check for one) use these tables to find
//! where it belongs.

use indexmap::IndexMap;

use super::node::{BracketNode, SyntaxNode};
use super::tree::DocumentKind;
use crate::parser::SyntaxKind;

/// Domain sections, in required order
pub const DOMAIN_SECTIONS: &[&str] = &[
    ":requirements",
    ":types",
    ":constants",
    ":predicates",
    ":functions",
    ":constraints",
];

/// Problem sections, in required order
pub const PROBLEM_SECTIONS: &[&str] = &[
    ":domain",
    ":requirements",
    ":objects",
    ":init",
    ":goal",
    ":constraints",
    ":metric",
];

pub const ACTION_SECTIONS: &[&str] = &[":parameters", ":precondition", ":effect"];

pub const DURATIVE_ACTION_SECTIONS: &[&str] = &[":parameters", ":duration", ":condition", ":effect"];

/// `:process` and `:event` share the instantaneous action layout
pub const PROCESS_SECTIONS: &[&str] = ACTION_SECTIONS;

/// Structures that follow the sections in a domain
pub const ACTION_LIKE_STRUCTURES: &[&str] = &[
    ":action",
    ":durative-action",
    ":process",
    ":event",
    ":derived",
];

/// Section order for a document kind; empty for `Unknown`
pub fn sections_for(kind: DocumentKind) -> &'static [&'static str] {
    match kind {
        DocumentKind::Domain => DOMAIN_SECTIONS,
        DocumentKind::Problem => PROBLEM_SECTIONS,
        DocumentKind::Unknown => &[],
    }
}

/// Keyword sections of an action-like structure, e.g. `":durative-action"`
pub fn sections_for_structure(keyword: &str) -> &'static [&'static str] {
    match keyword.to_ascii_lowercase().as_str() {
        ":action" => ACTION_SECTIONS,
        ":durative-action" => DURATIVE_ACTION_SECTIONS,
        ":process" | ":event" => PROCESS_SECTIONS,
        _ => &[],
    }
}

/// Document kind judged from the `(domain`/`(problem` header under `define`
pub fn document_kind_of(define: &SyntaxNode<'_>) -> DocumentKind {
    if define.first_open_bracket("domain").is_some() {
        DocumentKind::Domain
    } else if define.first_open_bracket("problem").is_some() {
        DocumentKind::Problem
    } else {
        DocumentKind::Unknown
    }
}

/// Section brackets present under `define`, keyed by lowercase keyword
///
/// Source order is kept; a repeated section keeps its first occurrence.
pub fn sections<'t>(define: &SyntaxNode<'t>) -> IndexMap<String, BracketNode<'t>> {
    let mut found = IndexMap::new();
    for bracket in define.nested_children().filter_map(|c| c.as_bracket()) {
        if bracket.kind() != SyntaxKind::OPEN_BRACKET_OPERATOR {
            continue;
        }
        let keyword = bracket.keyword().to_ascii_lowercase();
        if keyword.starts_with(':') && !ACTION_LIKE_STRUCTURES.contains(&keyword.as_str()) {
            found.entry(keyword).or_insert(bracket);
        }
    }
    found
}

/// The last existing section that must come before `keyword`
///
/// This is where a missing `keyword` section gets inserted after. `None`
/// when no preceding section exists or `keyword` is not a known section.
pub fn find_preceding_section<'t>(
    define: &SyntaxNode<'t>,
    keyword: &str,
) -> Option<BracketNode<'t>> {
    let order = sections_for(document_kind_of(define));
    let position = order
        .iter()
        .position(|section| section.eq_ignore_ascii_case(keyword))?;
    let present = sections(define);
    order[..position]
        .iter()
        .rev()
        .find_map(|section| present.get(*section).copied())
}

/// Sections of the document's kind that `define` does not contain
pub fn missing_sections(define: &SyntaxNode<'_>) -> Vec<&'static str> {
    let present = sections(define);
    sections_for(document_kind_of(define))
        .iter()
        .copied()
        .filter(|section| !present.contains_key(*section))
        .collect()
}

/// Every action-like structure directly under `define`, in source order
pub fn action_like_children<'t>(define: &SyntaxNode<'t>) -> Vec<BracketNode<'t>> {
    define
        .nested_children()
        .filter_map(|c| c.as_bracket())
        .filter(|bracket| {
            ACTION_LIKE_STRUCTURES
                .iter()
                .any(|structure| structure.eq_ignore_ascii_case(bracket.keyword()))
        })
        .collect()
}
