//! Core types for the rulebook system.
//!
//! This crate provides:
//! - [`Rule`] - A named pattern and the matcher compiled from it
//! - [`RuleSet`] - An ordered, name-keyed collection of rules
//! - [`Error`] - Error types covering parsing, compilation, and lookup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rule;
pub mod ruleset;

pub use error::{Error, Result};
pub use rule::Rule;
pub use ruleset::{DuplicatePolicy, RuleSet};
