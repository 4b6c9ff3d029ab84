//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Tokenizes `input` to exhaustion and returns `(kind, literal)` pairs,
/// including the trailing `EOF`.
pub(super) fn tokenize(input: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        out.push((tok.kind, tok.literal));
        if done {
            break;
        }
    }
    out
}

/// Tokenizes `input` and returns only the kinds, dropping literals.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|(k, _)| k).collect()
}

mod operators;
