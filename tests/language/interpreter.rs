//! Integration tests for the interpreter state machine.

use rulebook_foundation::{DuplicatePolicy, Error, RuleSet};
use rulebook_language::{Interpreter, InterpreterConfig};

fn interpret(source: &str) -> Result<RuleSet, Error> {
    Interpreter::new().interpret(source)
}

// =============================================================================
// Well-formed inputs
// =============================================================================

#[test]
fn n_declarations_yield_n_rules() {
    let source = "\
@digits = \"[0-9]+\"
@word = \"\\w+\"
@hex = \"[0-9a-f]+\"
";
    let rules = interpret(source).unwrap();
    assert_eq!(rules.len(), 3);
    for name in ["digits", "word", "hex"] {
        assert!(rules.get(name).is_ok());
    }
}

#[test]
fn example_end_to_end() {
    let rules = interpret("@digits = \"[0-9]+\"\n").unwrap();
    let rule = rules.get("digits").unwrap();
    assert_eq!(rule.pattern(), Some("[0-9]+"));
    assert!(rule.is_match("42"));
    assert!(!rule.is_match("abc"));
}

#[test]
fn fold_flag_example() {
    let rules = interpret("@ws =s \"a b\"\n").unwrap();
    assert_eq!(rules.get("ws").unwrap().pattern(), Some("ab"));
}

#[test]
fn unfolded_body_is_byte_for_byte() {
    let rules = interpret("@spacey = \"a  b\tc\"\n").unwrap();
    assert_eq!(rules.get("spacey").unwrap().pattern(), Some("a  b\tc"));
}

#[test]
fn fold_flag_keeps_escaped_whitespace() {
    // `\ ` is an escape unit, not whitespace, so folding leaves it alone
    let rules = interpret("@mix =s \"a \\ b\"\n").unwrap();
    assert_eq!(rules.get("mix").unwrap().pattern(), Some("a\\ b"));
}

#[test]
fn escaped_quote_does_not_close_the_body() {
    let rules = interpret("@quoted = \"say \\\"hi\\\"\"\n").unwrap();
    assert_eq!(rules.get("quoted").unwrap().pattern(), Some("say \\\"hi\\\""));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let source = "\
# rule file header

@one = \"1\"
   \t
# trailing note about @two = \"2\"
";
    let rules = interpret(source).unwrap();
    assert_eq!(rules.len(), 1);
    assert!(rules.get("two").is_err());
}

#[test]
fn comment_at_eof_without_newline_is_fine() {
    let rules = interpret("@one = \"1\"\n# no trailing newline").unwrap();
    assert_eq!(rules.len(), 1);
}

#[test]
fn declarations_spread_over_lines() {
    // Nothing requires a declaration to fit on one line
    let rules = interpret("@multi\n= \"ab\ncd\"\n").unwrap();
    assert_eq!(rules.get("multi").unwrap().pattern(), Some("ab\ncd"));
}

#[test]
fn underscored_and_numbered_names() {
    let rules = interpret("@rule_2 = \"x\"\n").unwrap();
    assert!(rules.get("rule_2").is_ok());
}

// =============================================================================
// Finalization semantics
// =============================================================================

#[test]
fn token_after_closing_quote_is_not_swallowed() {
    // The closing quote finalizes the rule immediately, so a directly
    // following declaration is parsed in full.
    let rules = interpret("@a = \"x\"@b = \"y\"\n").unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.get("a").unwrap().pattern(), Some("x"));
    assert_eq!(rules.get("b").unwrap().pattern(), Some("y"));
}

#[test]
fn comment_directly_after_closing_quote() {
    let rules = interpret("@a = \"x\"# comment\n@b = \"y\"\n").unwrap();
    assert_eq!(rules.len(), 2);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn garbage_in_liminal_state_is_rejected() {
    let err = interpret("rule = \"x\"\n").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedToken { line: 1, column: 1, .. }
    ));
}

#[test]
fn error_position_is_token_based() {
    // `\d` is a single escape-unit token; it is not a word character,
    // so the name state rejects it at token position 2, not 3.
    let err = interpret("@\\d= \"x\"\n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { line: 1, column: 2, .. }));
}

#[test]
fn missing_closing_quote_reports_eof() {
    let err = interpret("@rule = \"[unterminated\n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { line: 1, .. }));
}

#[test]
fn dangling_declaration_reports_eof() {
    let err = interpret("@pending = \n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
}

#[test]
fn bad_pattern_is_a_compile_error() {
    let err = interpret("@broken = \"[0-9\"\n").unwrap_err();
    assert!(err.is_compile());
    assert!(matches!(err, Error::PatternCompile { name, .. } if name == "broken"));
}

#[test]
fn first_error_halts_processing() {
    // The bad declaration comes first; the good one after it must not
    // be registered anywhere we can observe.
    let err = interpret("@bad = \"[\"\n@good = \"x\"\n").unwrap_err();
    assert!(err.is_compile());
}

#[test]
fn anonymous_rule_is_rejected() {
    let err = interpret("@ = \"x\"\n").unwrap_err();
    assert!(matches!(err, Error::AnonymousRule));
}

#[test]
fn equals_without_frozen_name_is_rejected() {
    let err = interpret("@name= \"x\"\n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { .. }));
}

// =============================================================================
// Duplicate policy
// =============================================================================

#[test]
fn duplicates_rejected_by_default() {
    let err = interpret("@a = \"x\"\n@a = \"y\"\n").unwrap_err();
    assert!(matches!(err, Error::DuplicateRule { name } if name == "a"));
}

#[test]
fn duplicates_overwrite_when_configured() {
    let config = InterpreterConfig::new().with_duplicate_rules(DuplicatePolicy::Overwrite);
    let rules = Interpreter::with_config(config)
        .interpret("@a = \"x\"\n@b = \"m\"\n@a = \"y\"\n")
        .unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.get("a").unwrap().pattern(), Some("y"));
    // Overwriting keeps the original declaration position
    let order: Vec<_> = rules.names().collect();
    assert_eq!(order, vec!["a", "b"]);
}
