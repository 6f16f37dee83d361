//! Ordered, name-keyed collections of rules.
//!
//! A [`RuleSet`] maps unique rule names to [`Rule`] values and iterates
//! in declaration order, so repeated runs over the same input produce
//! the same output.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::rule::Rule;

/// Policy for inserting a rule whose name is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Reject the insertion with [`Error::DuplicateRule`].
    #[default]
    Reject,
    /// Replace the existing rule; it keeps its original position in
    /// declaration order.
    Overwrite,
}

/// An ordered, name-keyed collection of rules.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    /// Names in declaration order.
    order: Vec<String>,
    rules: HashMap<String, Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule under its own name.
    ///
    /// # Errors
    /// Returns [`Error::AnonymousRule`] if the rule's name is empty, or
    /// [`Error::DuplicateRule`] if the name is taken and `policy` is
    /// [`DuplicatePolicy::Reject`].
    pub fn insert(&mut self, rule: Rule, policy: DuplicatePolicy) -> Result<()> {
        let name = rule.name().to_string();
        if name.is_empty() {
            return Err(Error::AnonymousRule);
        }
        if self.rules.contains_key(&name) {
            match policy {
                DuplicatePolicy::Reject => return Err(Error::duplicate_rule(name)),
                DuplicatePolicy::Overwrite => {
                    self.rules.insert(name, rule);
                    return Ok(());
                }
            }
        }
        self.order.push(name.clone());
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Looks up a rule by name.
    ///
    /// # Errors
    /// Returns [`Error::RuleNotFound`] if no rule has that name.
    pub fn get(&self, name: &str) -> Result<&Rule> {
        self.rules
            .get(name)
            .ok_or_else(|| Error::rule_not_found(name))
    }

    /// Returns true if a rule with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.order.iter().filter_map(|name| self.rules.get(name))
    }

    /// Iterates over the rule names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = Box<dyn Iterator<Item = &'a Rule> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
