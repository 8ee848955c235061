//! PDDL keyword tables
//!
//! The lexer fuses `(` with any word listed in [`OPERATORS`] (and with any
//! `:`-prefixed word) into a single `OPEN_BRACKET_OPERATOR` token. The scope
//! resolver uses [`PARAMETRISABLE_FORMS`] to find constructs that bind
//! `?parameters`.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Non-`:` words that fuse with a preceding `(`.
///
/// Matching is case-insensitive; entries are lowercase.
pub const OPERATORS: &[&str] = &[
    // document structure
    "define",
    "domain",
    "problem",
    // logical connectives and quantifiers
    "and",
    "or",
    "not",
    "imply",
    "when",
    "forall",
    "exists",
    "sumall",
    "either",
    "preference",
    "is-violated",
    // temporal qualifiers
    "at",
    "over",
    // trajectory constraints
    "always",
    "sometime",
    "within",
    "at-most-once",
    "sometime-after",
    "sometime-before",
    "always-within",
    "hold-during",
    "hold-after",
    // numeric effects
    "assign",
    "increase",
    "decrease",
    "scale-up",
    "scale-down",
    // metric
    "minimize",
    "maximize",
    // arithmetic and comparison
    "+",
    "-",
    "*",
    "/",
    "^",
    "=",
    "<",
    ">",
    "<=",
    ">=",
];

/// Keywords of constructs that introduce `?parameter` bindings.
pub const PARAMETRISABLE_FORMS: &[&str] = &[
    ":action",
    ":durative-action",
    ":process",
    ":event",
    ":derived",
    "forall",
    "sumall",
    "exists",
];

/// Parametrisable forms whose parameters are declared under `:parameters`.
pub const ACTION_LIKE_FORMS: &[&str] = &[":action", ":durative-action", ":process", ":event"];

static OPERATOR_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| OPERATORS.iter().copied().collect());

/// Check whether `word` fuses with a preceding `(`.
pub fn is_bracket_operator(word: &str) -> bool {
    if word.len() > 1 && word.starts_with(':') {
        return true;
    }
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        OPERATOR_SET.contains(word.to_ascii_lowercase().as_str())
    } else {
        OPERATOR_SET.contains(word)
    }
}

/// The keyword part of an `OPEN_BRACKET_OPERATOR` token text.
///
/// `"(define"` gives `"define"`, `"( :action"` gives `":action"`.
pub fn bracket_keyword(text: &str) -> &str {
    text.strip_prefix('(').unwrap_or(text).trim_start()
}

/// Check whether an `OPEN_BRACKET_OPERATOR` text introduces parameters.
pub fn is_parametrisable_form(bracket_text: &str) -> bool {
    let keyword = bracket_keyword(bracket_text);
    PARAMETRISABLE_FORMS
        .iter()
        .any(|form| form.eq_ignore_ascii_case(keyword))
}

/// Check whether an `OPEN_BRACKET_OPERATOR` text is an action-like form.
pub fn is_action_like_form(bracket_text: &str) -> bool {
    let keyword = bracket_keyword(bracket_text);
    ACTION_LIKE_FORMS
        .iter()
        .any(|form| form.eq_ignore_ascii_case(keyword))
}
