//! Integration tests for escape-aware tokenization.

use rulebook_language::{Token, Tokenizer};

fn tokens(line: &str) -> Vec<Token> {
    Tokenizer::new(line)
        .collect::<Result<_, _>>()
        .expect("tokenization should succeed")
}

#[test]
fn one_token_per_plain_character() {
    let line = "@x = \"y\"";
    assert_eq!(tokens(line).len(), line.chars().count());
}

#[test]
fn escape_unit_counts_as_one_token() {
    // Four characters, three tokens: a, \d, b
    assert_eq!(
        tokens(r"a\db"),
        vec![Token::Char('a'), Token::Escape('d'), Token::Char('b')]
    );
}

#[test]
fn double_backslash_stays_two_tokens() {
    assert_eq!(
        tokens(r"\\d"),
        vec![Token::Char('\\'), Token::Char('\\'), Token::Char('d')]
    );
}

#[test]
fn escaped_backslash_then_escape() {
    // \\ then \n: two literal backslashes followed by one escape unit
    assert_eq!(
        tokens(r"\\\n"),
        vec![Token::Char('\\'), Token::Char('\\'), Token::Escape('n')]
    );
}

#[test]
fn escaped_quote_is_not_a_quote_token() {
    let toks = tokens(r#"\""#);
    assert_eq!(toks, vec![Token::Escape('"')]);
    assert_ne!(toks[0], Token::Char('"'));
}

#[test]
fn lone_trailing_backslash_fails() {
    let results: Vec<_> = Tokenizer::new("abc\\").collect();
    assert_eq!(results.len(), 4);
    assert!(results[3].is_err());
}

#[test]
fn backslash_mid_line_before_newline() {
    // The newline is a perfectly good character to escape
    assert_eq!(tokens("\\\n"), vec![Token::Escape('\n')]);
}
