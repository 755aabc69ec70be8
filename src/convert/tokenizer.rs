//! logos-based structural tokenizer.
//!
//! The converter never needs to understand CSS values, only where they
//! begin and end. This lexer therefore classifies input into the handful of
//! characters that carry structure (stop characters, parentheses, quotes,
//! separators) and opaque [`Token::Text`] runs for everything else.
//!
//! Every input character belongs to exactly one variant, so lexing never
//! produces an error token and concatenating the slices reproduces the input.

use logos::Logos;

/// Structural token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // ── Stop characters ──────────────────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    // ── Nesting ──────────────────────────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `'`
    #[token("'")]
    SingleQuote,

    /// `"`
    #[token("\"")]
    DoubleQuote,

    // ── Value separators ─────────────────────────────────────────────

    /// `,`
    #[token(",")]
    Comma,

    /// A single space. Other whitespace is only ever seen inside text runs,
    /// since the preprocessor collapses every whitespace run to one space.
    #[token(" ")]
    Space,

    /// Any run of characters without structural meaning.
    #[regex(r#"[^{}:;()'", ]+"#)]
    Text,
}

impl Token {
    /// Returns `true` for the four characters that end a scanner segment.
    pub fn is_stop(self) -> bool {
        matches!(
            self,
            Token::BraceOpen | Token::BraceClose | Token::Colon | Token::Semicolon
        )
    }
}

/// Tokenize a string into `(Token, &str)` pairs borrowing from the input.
pub fn tokenize(input: &str) -> Vec<(Token, &str)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}
