//! Logos-based lexer for PDDL
//!
//! Lossless tokenization: whitespace and comments are tokens too, and the
//! concatenated token texts always reproduce the input exactly.
//!
//! The raw logos tokens never span an opening bracket and the word after it.
//! Fusion into `OPEN_BRACKET_OPERATOR` happens in [`Lexer::next`], which peeks
//! at the token following a `(`.

use super::keywords::is_bracket_operator;
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::warn;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: SmolStr,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<SmolStr>, start: TextSize) -> Self {
        let text = text.into();
        let range = TextRange::at(start, TextSize::of(text.as_str()));
        Self { kind, text, range }
    }

    /// The synthetic, empty token carried by the tree root
    pub fn document() -> Self {
        Self::new(SyntaxKind::DOCUMENT, "", TextSize::new(0))
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace that spans at least one line break
    pub fn is_vertical_whitespace(&self) -> bool {
        self.kind == SyntaxKind::WHITESPACE && self.text.contains('\n')
    }
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Offsets are `u32` (see [`TextSize`]): the lexer stops before the first
/// token that would end past `u32::MAX`.
///
/// Tokens are produced lazily, so a consumer may stop pulling at any point
/// (see the tree builder's target offset).
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }

    /// Decide whether the `(` just lexed fuses with the word after it.
    fn open_bracket_kind(&mut self) -> SyntaxKind {
        let mut lookahead = self.inner.clone();
        match lookahead.next() {
            Some(Ok(LogosToken::Keyword | LogosToken::Word | LogosToken::Dash))
                if is_bracket_operator(lookahead.slice()) =>
            {
                self.inner = lookahead;
                SyntaxKind::OPEN_BRACKET_OPERATOR
            }
            _ => SyntaxKind::OPEN_BRACKET,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let start = self.inner.span().start;

        let kind = match logos_token {
            Ok(LogosToken::OpenParen) => self.open_bracket_kind(),
            Ok(t) => t.into(),
            // every character is covered by some rule; keep going regardless
            Err(()) => SyntaxKind::OTHER,
        };

        let end = self.inner.span().end;
        // offsets are u32: input past 4 GiB is not tokenized
        if TextSize::try_from(end).is_err() {
            warn!(offset = start, "input exceeds u32 offsets, stopping");
            return None;
        }
        let text = &self.inner.source()[start..end];
        Some(Token::new(kind, text, TextSize::try_from(start).ok()?))
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,

    #[regex(r";[^\r\n]*", allow_greedy = true)]
    Comment,

    // =========================================================================
    // BRACKETS
    // =========================================================================
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // =========================================================================
    // WORDS
    // =========================================================================
    #[regex(r":[^ \t\r\n\x0B\x0C();]*", allow_greedy = true)]
    Keyword,

    #[regex(r"\?[^ \t\r\n\x0B\x0C();]*", allow_greedy = true)]
    Parameter,

    /// A lone `-`; longer words starting with `-` (`-3.14`) stay `Word`
    #[token("-", priority = 3)]
    Dash,

    /// Names, numbers (`-3.14`, `10`), `#t`, operators such as `<=`
    #[regex(r"[^ \t\r\n\x0B\x0C();:?][^ \t\r\n\x0B\x0C();]*", allow_greedy = true)]
    Word,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            Comment => SyntaxKind::COMMENT,
            OpenParen => SyntaxKind::OPEN_BRACKET,
            CloseParen => SyntaxKind::CLOSE_BRACKET,
            Keyword => SyntaxKind::KEYWORD,
            Parameter => SyntaxKind::PARAMETER,
            Dash => SyntaxKind::DASH,
            Word => SyntaxKind::OTHER,
        }
    }
}
