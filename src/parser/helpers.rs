//! Token navigation and the `expect_peek` error-accumulation helper.

use super::Parser;
use crate::token::{Precedence, TokenKind};

impl<'a> Parser<'a> {
    /// Shifts the lookahead window forward by one token.
    pub(super) fn next_token(&mut self) {
        std::mem::swap(&mut self.current, &mut self.peek);
        self.peek = self.lexer.next_token();
    }

    /// `true` if `peek` is `kind`.
    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// `true` if `current` is `kind`.
    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// If `peek` is `kind`, advances past it and returns `true`. Otherwise
    /// records a `"Expected '<kind>', got '<actual>'"` error and returns
    /// `false` without advancing.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(super) fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(format!(
            "Expected '{}', got '{}'",
            expected, self.peek.kind
        ));
    }

    pub(super) fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        self.errors
            .push(format!("No prefix parse function for '{}' found", kind));
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(super) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}
