//! The interpretation driver.
//!
//! The interpreter owns the current grammar state, the position
//! counters, and the rule set under construction. It feeds lines to the
//! tokenizer in order and dispatches each token to the active state,
//! halting on the first error.

use rulebook_foundation::{Error, Result, RuleSet};
use tracing::debug;

use crate::config::InterpreterConfig;
use crate::position::Position;
use crate::state::{Context, State, StateKind};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// The rule interpreter.
///
/// One interpreter performs one run: construct it, call
/// [`Interpreter::interpret`], and take the resulting [`RuleSet`].
#[derive(Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
    state: State,
    position: Position,
    rules: RuleSet,
}

impl Interpreter {
    /// Creates an interpreter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given configuration.
    #[must_use]
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Processes the full input and returns the finished rule set.
    ///
    /// Lines keep their trailing newline during tokenization; the
    /// newline token is what ends a comment. Input left in a state
    /// other than liminal at end of input is an error, except for a
    /// comment, which needs no terminator.
    ///
    /// # Errors
    /// Returns the first grammar, compilation, or registration error
    /// encountered, positioned at the offending line and token.
    pub fn interpret(mut self, source: &str) -> Result<RuleSet> {
        debug!("initiating grammar analysis");
        for line in source.split_inclusive('\n') {
            self.position.next_line();
            self.tokenize_line(line)?;
        }
        debug!("end of input reached");
        match self.state.kind() {
            StateKind::Liminal | StateKind::InComment => Ok(self.rules),
            StateKind::EnteringRule | StateKind::InRule => Err(Error::unexpected_eof(
                self.position.line,
                self.position.column,
            )),
        }
    }

    /// Tokenizes one line, feeding each token to the active state as it
    /// is emitted. The column counter advances once per token.
    fn tokenize_line(&mut self, line: &str) -> Result<()> {
        debug!(line = self.position.line, "tokenizing line");
        for lexed in Tokenizer::new(line) {
            self.position.advance();
            match lexed {
                Ok(token) => self.dispatch(token)?,
                Err(_) => {
                    return Err(Error::unterminated_escape(
                        self.position.line,
                        self.position.column,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Delegates one token to the current state and applies the state
    /// it hands back.
    fn dispatch(&mut self, token: Token) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let from = state.kind();
        let mut ctx = Context {
            position: self.position,
            rules: &mut self.rules,
            policy: self.config.duplicate_rules,
        };
        let next = state.analyze(token, &mut ctx)?;
        if next.kind() != from {
            debug!(?from, to = ?next.kind(), "state transition");
        }
        self.state = next;
        Ok(())
    }

    /// Transitions into a new state.
    ///
    /// Transitioning into the state class that is already active is a
    /// no-op apart from a diagnostic; the active state's buffers are
    /// kept.
    pub fn enter_state(&mut self, state: State) {
        if state.kind() == self.state.kind() {
            debug!(state = ?state.kind(), "already in state, no transition");
            return;
        }
        debug!(from = ?self.state.kind(), to = ?state.kind(), "entering state");
        self.state = state;
    }

    /// Returns the class of the currently active state.
    #[must_use]
    pub const fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Returns the current position, for diagnostics.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
