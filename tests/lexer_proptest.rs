//! Property-based tests for the PDDL lexer
//!
//! Whatever the input, the tokens must partition it exactly: contiguous,
//! non-empty, and concatenating back to the original text.

use pddl_syntax::parser::{SyntaxKind, tokenize};
use proptest::prelude::*;

/// Fragments that exercise every token rule and the fusion lookahead
fn pddl_fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("-".to_string()),
        Just("(define".to_string()),
        Just("(:action".to_string()),
        Just(":parameters".to_string()),
        "\\?[a-z]{1,4}",
        ":[a-z-]{0,8}",
        "[a-z][a-z0-9-]{0,8}",
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?",
        ";[a-z ()]{0,10}",
        "[<>=+*/^]{1,2}",
    ]
}

fn pddl_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(pddl_fragment_strategy(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_tokens_partition_pddl_like_input(input in pddl_text_strategy()) {
        let tokens = tokenize(&input);
        let mut offset = 0usize;
        for token in &tokens {
            prop_assert_eq!(usize::from(token.start()), offset);
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(&input[offset..usize::from(token.end())], token.text.as_str());
            offset = token.end().into();
        }
        prop_assert_eq!(offset, input.len());
    }

    #[test]
    fn test_tokens_partition_arbitrary_input(input in "\\PC{0,64}") {
        let joined: String = tokenize(&input).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn test_fused_tokens_start_with_bracket(input in pddl_text_strategy()) {
        for token in tokenize(&input) {
            match token.kind {
                SyntaxKind::OPEN_BRACKET_OPERATOR => {
                    prop_assert!(token.text.starts_with('('));
                    prop_assert!(token.text.len() > 1);
                }
                SyntaxKind::OPEN_BRACKET => prop_assert_eq!(token.text.as_str(), "("),
                SyntaxKind::CLOSE_BRACKET => prop_assert_eq!(token.text.as_str(), ")"),
                _ => prop_assert!(!token.text.contains(['(', ')'])
                    || token.kind == SyntaxKind::COMMENT),
            }
        }
    }
}
