//! Tests for single- and double-character operators.

use super::*;

#[test]
fn single_char_operators() {
    assert_eq!(
        tokenize_kinds("+-*/<>!"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn eq_and_not_eq_are_not_confused_with_assign_and_bang() {
    assert_eq!(
        tokenize_kinds("= == ! !="),
        vec![
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::Bang,
            TokenKind::NotEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn eq_literal_is_two_characters() {
    assert_eq!(
        tokenize(" == "),
        vec![
            (TokenKind::Eq, "==".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn brackets_and_braces() {
    assert_eq!(
        tokenize_kinds("[]{}()"),
        vec![
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}
