//! Configuration for an interpretation run.

use rulebook_foundation::DuplicatePolicy;

/// Configuration for the [`Interpreter`](crate::Interpreter).
///
/// Passed in at construction; there is no global switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// How to treat a declaration whose name is already registered.
    ///
    /// The default rejects the duplicate as a grammar error.
    pub duplicate_rules: DuplicatePolicy,
}

impl InterpreterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the duplicate-name policy.
    #[must_use]
    pub const fn with_duplicate_rules(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_rules = policy;
        self
    }
}
