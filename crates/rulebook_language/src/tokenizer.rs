//! Escape-aware tokenization of rule-language lines.
//!
//! The tokenizer scans one line at a time with a single held character
//! of lookahead. A backslash is held until the next character resolves
//! the ambiguity: `\x` becomes one escape unit, `\\` becomes two
//! literal backslash tokens. A backslash with nothing after it on the
//! line is an error, reported through the iterator.

use std::str::Chars;

use thiserror::Error;

use crate::token::Token;

/// Marker error for a lone backslash at end of line.
///
/// The tokenizer has no notion of line numbers; the interpreter maps
/// this into a positioned error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unterminated escape")]
pub struct UnterminatedEscape;

/// Iterator over the logical tokens of one line.
pub struct Tokenizer<'src> {
    chars: Chars<'src>,
    /// Second backslash of a `\\` pair, waiting to be emitted.
    queued: Option<Token>,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over one line of input.
    ///
    /// The line should include its trailing newline if it has one; the
    /// newline is an ordinary whitespace token to the grammar and the
    /// only thing that ends a comment.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self {
            chars: line.chars(),
            queued: None,
            done: false,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, UnterminatedEscape>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(token) = self.queued.take() {
            return Some(Ok(token));
        }
        match self.chars.next() {
            Some('\\') => match self.chars.next() {
                // Two backslashes are two literal tokens, not one unit
                Some('\\') => {
                    self.queued = Some(Token::Char('\\'));
                    Some(Ok(Token::Char('\\')))
                }
                Some(c) => Some(Ok(Token::Escape(c))),
                None => {
                    self.done = true;
                    Some(Err(UnterminatedEscape))
                }
            },
            Some(c) => Some(Ok(Token::Char(c))),
            None => None,
        }
    }
}
