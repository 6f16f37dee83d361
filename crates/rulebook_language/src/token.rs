//! Logical tokens of the rule grammar.
//!
//! Most tokens are single characters. The one exception is the escape
//! unit: a backslash and the character it escapes, which the tokenizer
//! merges into a single token so no grammar state ever needs lookahead.

use std::fmt;

/// A logical token produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A single literal character.
    Char(char),
    /// An escape unit: `\` followed by the escaped character.
    Escape(char),
}

impl Token {
    /// Returns true for whitespace tokens.
    ///
    /// Escape units are never whitespace, even when the escaped
    /// character is (`\ ` survives whitespace folding).
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Char(c) if c.is_whitespace())
    }

    /// Returns true for characters valid in a rule name.
    #[must_use]
    pub fn is_word(&self) -> bool {
        matches!(self, Self::Char(c) if c.is_alphanumeric() || *c == '_')
    }

    /// Appends this token's spelling to a buffer.
    ///
    /// An escape unit contributes both of its characters, so escapes
    /// reach the pattern compiler verbatim.
    pub fn push_onto(&self, buf: &mut String) {
        match self {
            Self::Char(c) => buf.push(*c),
            Self::Escape(c) => {
                buf.push('\\');
                buf.push(*c);
            }
        }
    }

    /// Returns this token's spelling as an owned string.
    #[must_use]
    pub fn text(&self) -> String {
        let mut buf = String::new();
        self.push_onto(&mut buf);
        buf
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Escape(c) => write!(f, "\\{c}"),
        }
    }
}
