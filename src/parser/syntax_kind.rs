//! Syntax kinds for the PDDL syntax tree
//!
//! Every token, and therefore every node, carries exactly one of these kinds.
//! The set is closed: the lexer and the tree builder match on it exhaustively.

/// All token and node kinds in a PDDL document
///
/// `DOCUMENT` is synthetic: it only ever appears on the tree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // ROOT
    // =========================================================================
    DOCUMENT = 0,

    // =========================================================================
    // TRIVIA (preserved, not semantically meaningful)
    // =========================================================================
    WHITESPACE,         // spaces, tabs, newlines
    COMMENT,            // ; to end of line

    // =========================================================================
    // BRACKETS
    // =========================================================================
    OPEN_BRACKET,           // (
    OPEN_BRACKET_OPERATOR,  // (define, (:action, (and, (+ ...
    CLOSE_BRACKET,          // )

    // =========================================================================
    // WORDS
    // =========================================================================
    KEYWORD,            // :parameters
    PARAMETER,          // ?x
    DASH,               // - (type ascription)
    OTHER,              // names, numbers, anything else
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this kind opens a bracket scope
    pub fn is_open_bracket(self) -> bool {
        matches!(self, Self::OPEN_BRACKET | Self::OPEN_BRACKET_OPERATOR)
    }

    /// Check if nodes of this kind can never own children
    ///
    /// The tree builder moves its cursor off such a node before attaching the
    /// next token. `CLOSE_BRACKET` is not listed: the cursor never rests on it.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::COMMENT | Self::OTHER | Self::PARAMETER | Self::DASH | Self::WHITESPACE
        )
    }

    /// Human-readable name, used in diagnostics and error messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DOCUMENT => "document",
            Self::WHITESPACE => "whitespace",
            Self::COMMENT => "comment",
            Self::OPEN_BRACKET => "'('",
            Self::OPEN_BRACKET_OPERATOR => "operator bracket",
            Self::CLOSE_BRACKET => "')'",
            Self::KEYWORD => "keyword",
            Self::PARAMETER => "parameter",
            Self::DASH => "'-'",
            Self::OTHER => "name",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
