//! Grammar states of the rule interpreter.
//!
//! The grammar is a four-state machine. Exactly one state is active at
//! a time; each state reacts to one token and either keeps accumulating
//! into its own buffers, hands the interpreter a new state, or fails
//! with a positioned error. The tokenizer's escape merging resolves the
//! only two-character ambiguity, so no state needs lookahead.

use rulebook_foundation::{DuplicatePolicy, Error, Result, Rule, RuleSet};
use tracing::debug;

use crate::position::Position;
use crate::token::Token;

/// Discriminant of a [`State`], used for transition checks and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateKind {
    /// Between declarations.
    Liminal,
    /// Reading a rule name.
    EnteringRule,
    /// Reading a rule body.
    InRule,
    /// Inside a comment.
    InComment,
}

/// The active grammar state, with its transient parse buffers.
///
/// Buffers move with the state value on every reaction and are dropped
/// on transition; they are never shared between states.
#[derive(Debug, Default)]
pub enum State {
    /// The transitional state: program start, and where the machine
    /// returns after every completed rule or comment.
    #[default]
    Liminal,
    /// After `@`, accumulating the rule name.
    EnteringRule(EnteringRule),
    /// After `=`, waiting for and then accumulating the rule body.
    InRule(InRule),
    /// After `#`, discarding everything until the newline.
    InComment,
}

/// Everything a state reaction may touch besides its own buffers.
pub(crate) struct Context<'a> {
    /// Position of the token being analyzed.
    pub position: Position,
    /// Destination for completed rules.
    pub rules: &'a mut RuleSet,
    /// Duplicate-name policy for registration.
    pub policy: DuplicatePolicy,
}

impl Context<'_> {
    fn unexpected(&self, token: Token) -> Error {
        Error::unexpected_token(token.text(), self.position.line, self.position.column)
    }
}

impl State {
    /// Returns this state's discriminant.
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::Liminal => StateKind::Liminal,
            Self::EnteringRule(_) => StateKind::EnteringRule,
            Self::InRule(_) => StateKind::InRule,
            Self::InComment => StateKind::InComment,
        }
    }

    /// Reacts to one token, consuming this state and producing the next.
    pub(crate) fn analyze(self, token: Token, ctx: &mut Context<'_>) -> Result<Self> {
        match self {
            Self::Liminal => Self::liminal(token, ctx),
            Self::EnteringRule(entering) => entering.analyze(token, ctx),
            Self::InRule(in_rule) => in_rule.analyze(token, ctx),
            Self::InComment => Ok(Self::in_comment(token)),
        }
    }

    /// Liminal reaction: consume whitespace, open declarations and
    /// comments, reject everything else.
    fn liminal(token: Token, ctx: &Context<'_>) -> Result<Self> {
        match token {
            Token::Char('@') => Ok(Self::EnteringRule(EnteringRule::default())),
            Token::Char('#') => Ok(Self::InComment),
            t if t.is_whitespace() => Ok(Self::Liminal),
            t => Err(ctx.unexpected(t)),
        }
    }

    /// Comment reaction: only a newline ends the comment.
    fn in_comment(token: Token) -> Self {
        if token == Token::Char('\n') {
            Self::Liminal
        } else {
            Self::InComment
        }
    }
}

/// Buffers for a rule name being read.
#[derive(Debug, Default)]
pub struct EnteringRule {
    name: String,
    /// Set by the first whitespace after the name; word characters are
    /// rejected once frozen.
    frozen: bool,
}

impl EnteringRule {
    fn analyze(mut self, token: Token, ctx: &mut Context<'_>) -> Result<State> {
        if token.is_whitespace() {
            if !self.frozen {
                self.frozen = true;
                debug!(name = %self.name, "rule name frozen");
            }
            Ok(State::EnteringRule(self))
        } else if token.is_word() {
            if self.frozen {
                return Err(ctx.unexpected(token));
            }
            token.push_onto(&mut self.name);
            Ok(State::EnteringRule(self))
        } else if token == Token::Char('=') && self.frozen {
            debug!(name = %self.name, "entering rule body");
            Ok(State::InRule(InRule::new(Rule::new(self.name))))
        } else {
            Err(ctx.unexpected(token))
        }
    }
}

/// Buffers for a rule body being read.
#[derive(Debug)]
pub struct InRule {
    rule: Rule,
    body: String,
    /// True once the opening quote has been seen.
    started: bool,
    /// Strip interior whitespace from the body before compilation.
    fold_whitespace: bool,
}

impl InRule {
    fn new(rule: Rule) -> Self {
        Self {
            rule,
            body: String::new(),
            started: false,
            fold_whitespace: false,
        }
    }

    fn analyze(mut self, token: Token, ctx: &mut Context<'_>) -> Result<State> {
        if self.started {
            return self.body_token(token, ctx);
        }
        match token {
            Token::Char('"') => {
                debug!(name = %self.rule.name(), "rule body started");
                self.started = true;
                Ok(State::InRule(self))
            }
            Token::Char('s') => {
                self.fold_whitespace = true;
                Ok(State::InRule(self))
            }
            t if t.is_whitespace() => Ok(State::InRule(self)),
            t => Err(ctx.unexpected(t)),
        }
    }

    /// Handles one token inside the quoted body.
    ///
    /// An unescaped closing quote finalizes the rule immediately: the
    /// body is set (compiling the matcher), the rule registered, and the
    /// machine returns to liminal. The token after the closing quote is
    /// dispatched normally, not swallowed.
    fn body_token(mut self, token: Token, ctx: &mut Context<'_>) -> Result<State> {
        match token {
            Token::Char('"') => {
                let mut rule = self.rule;
                rule.set_body(self.body)?;
                debug!(name = %rule.name(), "compiled pattern for rule");
                ctx.rules.insert(rule, ctx.policy)?;
                Ok(State::Liminal)
            }
            t if t.is_whitespace() && self.fold_whitespace => Ok(State::InRule(self)),
            t => {
                t.push_onto(&mut self.body);
                Ok(State::InRule(self))
            }
        }
    }
}
