//! Statement parsing.

use super::Parser;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Precedence, TokenKind};

impl<'a> Parser<'a> {
    /// Dispatches on the current token to parse one statement.
    ///
    /// Returns `None` when the statement itself failed to parse (an error
    /// has already been recorded); the caller simply skips it and moves
    /// on to the next token, which is how the parser keeps going after a
    /// syntax error instead of aborting.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.current.literal.clone();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::new(StmtKind::Let { name, value }, token))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::new(StmtKind::Return(value), token))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::new(StmtKind::ExpressionStmt(expr), token))
    }

    /// Parses `{ statement* }`, assuming `current` is the opening `{`.
    /// Leaves `current` on the closing `}` (or on `EOF`, if the brace was
    /// never closed).
    pub(super) fn parse_block_statement(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        statements
    }
}
