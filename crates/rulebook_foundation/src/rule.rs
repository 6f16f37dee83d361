//! Named pattern rules.
//!
//! A [`Rule`] is the unit of output of the interpreter: a name, the raw
//! pattern text the grammar supplied for it, and the matcher compiled
//! from that text.

use regex::Regex;

use crate::error::{Error, Result};

/// A named pattern rule.
///
/// The name is fixed at construction. The body may be assigned exactly
/// once via [`Rule::set_body`], which compiles the matcher eagerly; a
/// second assignment is an error.
#[derive(Clone, Debug)]
pub struct Rule {
    name: String,
    pattern: Option<String>,
    matcher: Option<Regex>,
}

impl Rule {
    /// Creates a rule with the given name and no body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: None,
            matcher: None,
        }
    }

    /// Returns the rule's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigns the rule body and compiles the matcher from it.
    ///
    /// # Errors
    /// Returns [`Error::BodyAlreadySet`] if a body was already assigned,
    /// or [`Error::PatternCompile`] if the body is not a valid pattern.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<()> {
        if self.pattern.is_some() {
            return Err(Error::body_already_set(&self.name));
        }
        let body = body.into();
        let matcher = Regex::new(&body).map_err(|e| Error::pattern_compile(&self.name, e))?;
        self.pattern = Some(body);
        self.matcher = Some(matcher);
        Ok(())
    }

    /// Returns the raw pattern text, if a body has been assigned.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Returns the compiled matcher, if a body has been assigned.
    #[must_use]
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }

    /// Returns true if the compiled matcher matches anywhere in `text`.
    ///
    /// A rule without a body matches nothing.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(text))
    }
}
