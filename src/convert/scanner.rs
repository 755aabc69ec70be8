//! Single-pass segment scanner.
//!
//! Splits preprocessed CSS on the stop characters `{ : ; }`, ignoring any
//! stop character that appears inside parentheses so that `url(a:b)` or
//! `calc(...)` never end a segment early. Quotes are not tracked here.

use tracing::trace;

use crate::convert::tokenizer::{tokenize, Token};

/// A scanned piece of input, classified by the stop character that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `{`; whatever preceded it (a selector) is dropped.
    BlockOpen,
    /// Text ended by `:`.
    RuleName(String),
    /// Text ended by `;`.
    RuleValue(String),
    /// `}`.
    BlockClose,
}

/// Result of scanning one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub segments: Vec<Segment>,
    /// Parenthesis depth at end of input.
    pub depth: i32,
    /// Lowest depth reached; negative when a `)` had no opener.
    pub min_depth: i32,
    /// Trimmed text after the last stop character, never delivered as a
    /// segment.
    pub remainder: String,
}

impl Scan {
    /// All parentheses closed and never over-closed.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.min_depth == 0
    }
}

/// Scan preprocessed text into segments.
pub fn scan(input: &str) -> Scan {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut depth: i32 = 0;
    let mut min_depth: i32 = 0;

    for (token, text) in tokenize(input) {
        match token {
            Token::ParenOpen => depth += 1,
            Token::ParenClose => {
                depth -= 1;
                min_depth = min_depth.min(depth);
            }
            _ => {}
        }

        if depth != 0 || !token.is_stop() {
            buffer.push_str(text);
            continue;
        }

        let segment = match token {
            Token::BraceOpen => Segment::BlockOpen,
            Token::Colon => Segment::RuleName(buffer.clone()),
            Token::Semicolon => Segment::RuleValue(buffer.clone()),
            _ => Segment::BlockClose,
        };
        trace!(?segment, "scanned segment");
        segments.push(segment);
        buffer.clear();
    }

    Scan {
        segments,
        depth,
        min_depth,
        remainder: buffer.trim().to_string(),
    }
}
