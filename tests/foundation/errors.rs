//! Integration tests for error classification and display.

use rulebook_foundation::Error;

#[test]
fn parse_errors_carry_positions() {
    let err = Error::unexpected_token("\\q", 4, 12);
    assert!(err.is_parse());
    let msg = format!("{err}");
    assert!(msg.contains("line 4"));
    assert!(msg.contains("char 12"));
}

#[test]
fn escape_unit_text_appears_in_message() {
    let err = Error::unexpected_token("\\q", 1, 1);
    assert!(format!("{err}").contains("\\q"));
}

#[test]
fn eof_error_is_parse_class() {
    let err = Error::unexpected_eof(9, 3);
    assert!(err.is_parse());
    assert!(!err.is_compile());
    assert!(!err.is_lookup());
}

#[test]
fn compile_error_names_the_rule() {
    let bad = regex::Regex::new("(").unwrap_err();
    let err = Error::pattern_compile("paren", bad);
    assert!(err.is_compile());
    assert!(format!("{err}").contains("paren"));
}

#[test]
fn lookup_error_names_the_rule() {
    let err = Error::rule_not_found("ghost");
    assert!(err.is_lookup());
    assert_eq!(format!("{err}"), "no rule named ghost");
}

#[test]
fn every_error_is_exactly_one_class() {
    let errors = vec![
        Error::unexpected_token("x", 1, 1),
        Error::unterminated_escape(1, 1),
        Error::unexpected_eof(1, 1),
        Error::body_already_set("a"),
        Error::duplicate_rule("a"),
        Error::AnonymousRule,
        Error::pattern_compile("a", regex::Regex::new("(").unwrap_err()),
        Error::rule_not_found("a"),
    ];
    for err in errors {
        let classes =
            usize::from(err.is_parse()) + usize::from(err.is_compile()) + usize::from(err.is_lookup());
        assert_eq!(classes, 1, "{err} classified {classes} times");
    }
}
