//! Quote- and parenthesis-aware splitting, shared by the comma and the space
//! passes of the value parser.

use crate::convert::tokenizer::{tokenize, Token};

/// Separator recognised by [`split_structural`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Space,
}

impl Separator {
    fn token(self) -> Token {
        match self {
            Separator::Comma => Token::Comma,
            Separator::Space => Token::Space,
        }
    }
}

/// Nesting state tracked while walking a value.
///
/// Each quote kind flips its own flag, so quotes never nest: a `'` inside a
/// double-quoted string still toggles the single-quote flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nesting {
    pub depth: i32,
    pub single_quote: bool,
    pub double_quote: bool,
}

impl Nesting {
    /// Update the state for one token.
    pub fn feed(&mut self, token: Token) {
        match token {
            Token::ParenOpen => self.depth += 1,
            Token::ParenClose => self.depth -= 1,
            Token::SingleQuote => self.single_quote = !self.single_quote,
            Token::DoubleQuote => self.double_quote = !self.double_quote,
            _ => {}
        }
    }

    /// Outside every parenthesis and quote.
    pub fn at_rest(&self) -> bool {
        self.depth == 0 && !self.single_quote && !self.double_quote
    }
}

/// Split `input` on `separator` wherever it appears outside parentheses and
/// quotes.
///
/// Pieces are trimmed. Empty pieces between two separators are kept, but a
/// trailing empty buffer is not emitted.
pub fn split_structural(input: &str, separator: Separator) -> Vec<String> {
    let separator = separator.token();
    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut nesting = Nesting::default();

    for (token, text) in tokenize(input) {
        nesting.feed(token);

        if token == separator && nesting.at_rest() {
            parts.push(buffer.trim().to_string());
            buffer.clear();
        } else {
            buffer.push_str(text);
        }
    }

    if !buffer.is_empty() {
        parts.push(buffer.trim().to_string());
    }

    parts
}

/// Returns `true` if every parenthesis and quote in `input` is closed.
///
/// Unlike [`Nesting`], a quote of one kind inside a string delimited by the
/// other kind is plain text here, so `"it's"` is balanced. Parentheses
/// inside strings are ignored.
pub fn is_balanced(input: &str) -> bool {
    let mut depth: i32 = 0;
    let mut quote: Option<Token> = None;

    for (token, _) in tokenize(input) {
        match (quote, token) {
            (Some(open), t) if t == open => quote = None,
            (Some(_), _) => {}
            (None, Token::SingleQuote | Token::DoubleQuote) => quote = Some(token),
            (None, Token::ParenOpen) => depth += 1,
            (None, Token::ParenClose) => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            (None, _) => {}
        }
    }

    depth == 0 && quote.is_none()
}
