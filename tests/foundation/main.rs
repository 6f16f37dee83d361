//! Integration tests for Layer 0: Foundation
//!
//! Tests for rules, rule sets, and error classification.

mod errors;
mod rules;
