//! Integration tests for the Rule type.

use rulebook_foundation::{Error, Rule};

#[test]
fn rule_compiles_body_eagerly() {
    let mut rule = Rule::new("digits");
    rule.set_body("[0-9]+").unwrap();

    // The matcher exists the moment the body is assigned
    let matcher = rule.matcher().unwrap();
    assert!(matcher.is_match("line 42"));
    assert_eq!(rule.pattern(), Some("[0-9]+"));
}

#[test]
fn matcher_displays_as_pattern_source() {
    let mut rule = Rule::new("word");
    rule.set_body("\\w+").unwrap();
    assert_eq!(format!("{}", rule.matcher().unwrap()), "\\w+");
}

#[test]
fn body_is_assigned_at_most_once() {
    let mut rule = Rule::new("once");
    rule.set_body("a").unwrap();
    let err = rule.set_body("b").unwrap_err();
    assert!(matches!(err, Error::BodyAlreadySet { .. }));
}

#[test]
fn malformed_body_is_a_compile_error() {
    let mut rule = Rule::new("broken");
    let err = rule.set_body("[0-9").unwrap_err();
    assert!(err.is_compile());
}

#[test]
fn escape_sequences_reach_the_matcher_verbatim() {
    let mut rule = Rule::new("spaced");
    rule.set_body("a\\sb").unwrap();
    assert!(rule.is_match("a b"));
    assert!(!rule.is_match("ab"));
}
