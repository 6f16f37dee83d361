//! Rulebook - a compiler for a small rule-definition language
//!
//! This crate re-exports all layers of the rulebook system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rulebook_runtime    — CLI, file loading, reports
//! Layer 1: rulebook_language   — Tokenizer, grammar states, interpreter
//! Layer 0: rulebook_foundation — Core types (Rule, RuleSet, Error)
//! ```

pub use rulebook_foundation as foundation;
pub use rulebook_language as language;
pub use rulebook_runtime as runtime;
