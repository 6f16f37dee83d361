//! Source position tracking.
//!
//! Positions are used only for diagnostics. The column counter advances
//! once per emitted token, not per raw character, so an escape unit
//! occupies a single position.

use std::fmt;

/// A 1-based line/char position in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Position {
    /// 1-based line number; 0 before the first line is read.
    pub line: u32,
    /// 1-based token position within the line; 0 before the first token.
    pub column: u32,
}

impl Position {
    /// Creates a position before the start of input.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Advances to the next line and resets the column counter.
    pub const fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Advances past one emitted token.
    pub const fn advance(&mut self) {
        self.column += 1;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, char {}", self.line, self.column)
    }
}
