//! Error types for the rulebook system.
//!
//! Uses `thiserror` for ergonomic error definition. Every error is fatal
//! to the interpretation run it occurred in; the core never recovers,
//! prints, or exits on its own.

use thiserror::Error;

/// Result alias using the rulebook [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for rulebook operations.
///
/// Errors fall into three classes: grammar violations (parse), pattern
/// compilation failures (compile), and missing-rule lookups (lookup).
/// Use [`Error::is_parse`], [`Error::is_compile`], and
/// [`Error::is_lookup`] to classify without matching every variant.
#[derive(Debug, Error)]
pub enum Error {
    /// A token the active grammar state cannot accept.
    #[error("unexpected token {token:?} at line {line}, char {column}")]
    UnexpectedToken {
        /// Text of the offending token (two characters for an escape unit).
        token: String,
        /// 1-based line number where the token was consumed.
        line: u32,
        /// 1-based token position within the line.
        column: u32,
    },

    /// A backslash at end of line with nothing to escape.
    #[error("unterminated escape at line {line}, char {column}")]
    UnterminatedEscape {
        /// 1-based line number of the lone backslash.
        line: u32,
        /// 1-based token position of the lone backslash.
        column: u32,
    },

    /// Input ended while a declaration was still open.
    #[error("unexpected end of input at line {line}, char {column}")]
    UnexpectedEof {
        /// Last line number reached.
        line: u32,
        /// Last token position reached on that line.
        column: u32,
    },

    /// A second body assignment to a rule that already has one.
    #[error("rule {name} already has a body")]
    BodyAlreadySet {
        /// Name of the rule.
        name: String,
    },

    /// A declaration reusing a name already present in the set.
    #[error("duplicate rule name: {name}")]
    DuplicateRule {
        /// The name declared twice.
        name: String,
    },

    /// An attempt to register a rule with an empty name.
    #[error("cannot register an anonymous rule")]
    AnonymousRule,

    /// The assembled body is not a valid pattern.
    #[error("invalid pattern for rule {name}")]
    PatternCompile {
        /// Name of the rule whose body failed to compile.
        name: String,
        /// The underlying regex engine error.
        #[source]
        source: regex::Error,
    },

    /// A lookup for a name not present in the set.
    #[error("no rule named {name}")]
    RuleNotFound {
        /// The name that was requested.
        name: String,
    },
}

impl Error {
    /// Creates an unexpected-token error at the given position.
    #[must_use]
    pub fn unexpected_token(token: impl Into<String>, line: u32, column: u32) -> Self {
        Self::UnexpectedToken {
            token: token.into(),
            line,
            column,
        }
    }

    /// Creates an unterminated-escape error at the given position.
    #[must_use]
    pub fn unterminated_escape(line: u32, column: u32) -> Self {
        Self::UnterminatedEscape { line, column }
    }

    /// Creates an unexpected-end-of-input error at the given position.
    #[must_use]
    pub fn unexpected_eof(line: u32, column: u32) -> Self {
        Self::UnexpectedEof { line, column }
    }

    /// Creates a body-already-set error for the named rule.
    #[must_use]
    pub fn body_already_set(name: impl Into<String>) -> Self {
        Self::BodyAlreadySet { name: name.into() }
    }

    /// Creates a duplicate-name error for the named rule.
    #[must_use]
    pub fn duplicate_rule(name: impl Into<String>) -> Self {
        Self::DuplicateRule { name: name.into() }
    }

    /// Creates a pattern-compilation error for the named rule.
    #[must_use]
    pub fn pattern_compile(name: impl Into<String>, source: regex::Error) -> Self {
        Self::PatternCompile {
            name: name.into(),
            source,
        }
    }

    /// Creates a rule-not-found error for the requested name.
    #[must_use]
    pub fn rule_not_found(name: impl Into<String>) -> Self {
        Self::RuleNotFound { name: name.into() }
    }

    /// Returns true for grammar violations.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedToken { .. }
                | Self::UnterminatedEscape { .. }
                | Self::UnexpectedEof { .. }
                | Self::BodyAlreadySet { .. }
                | Self::DuplicateRule { .. }
                | Self::AnonymousRule
        )
    }

    /// Returns true for pattern compilation failures.
    #[must_use]
    pub const fn is_compile(&self) -> bool {
        matches!(self, Self::PatternCompile { .. })
    }

    /// Returns true for missing-rule lookups.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::RuleNotFound { .. })
    }
}
