//! Tokenizer, grammar states, and interpreter for the rulebook language.
//!
//! The language is line-oriented:
//!
//! ```text
//! # comments run through end of line
//! @digits = "[0-9]+"
//! @ws     =s "a b"      # the s flag folds interior whitespace
//! ```
//!
//! # Architecture
//!
//! ```text
//! source lines
//!      │
//!      ▼
//! ┌─────────────┐
//! │  TOKENIZER  │  → one token per character, escapes merged: `\d` is
//! └─────────────┘    a single escape unit, `\\` two literal backslashes
//!      │
//!      ▼
//! ┌─────────────┐
//! │   STATES    │  → Liminal / EnteringRule / InRule / InComment,
//! └─────────────┘    one reaction per token, buffers live in the state
//!      │
//!      ▼
//! ┌─────────────┐
//! │ INTERPRETER │  → drives lines and positions, owns the RuleSet,
//! └─────────────┘    halts on the first error
//! ```
//!
//! # Modules
//!
//! - [`token`] - Logical tokens (single characters and escape units)
//! - [`tokenizer`] - Per-line, escape-aware tokenization
//! - [`position`] - 1-based line/char counters for diagnostics
//! - [`state`] - The closed set of grammar states
//! - [`config`] - Interpretation knobs
//! - [`interpreter`] - The driver

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod interpreter;
pub mod position;
pub mod state;
pub mod token;
pub mod tokenizer;


// Re-export main types for convenience
pub use config::InterpreterConfig;
pub use interpreter::Interpreter;
pub use position::Position;
pub use state::{State, StateKind};
pub use token::Token;
pub use tokenizer::Tokenizer;
