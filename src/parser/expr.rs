//! Pratt expression parsing: prefix/infix dispatch and the precedence climb.

use crate::ast::{Expr, ExprKind};
use crate::token::{Precedence, TokenKind};

use super::Parser;

impl<'a> Parser<'a> {
    /// The Pratt core. Parses an expression binding no looser than
    /// `precedence`, climbing through infix operators as long as the next
    /// one binds tighter.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                TokenKind::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                TokenKind::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Str => Some(self.parse_string_literal()),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            other => {
                self.no_prefix_parse_fn_error(other);
                None
            }
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        let token = self.current.clone();
        Expr::new(ExprKind::Identifier(token.literal.clone()), token)
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::new(ExprKind::IntegerLit(value), token)),
            Err(_) => {
                self.errors
                    .push(format!("Could not parse '{}' as int", token.literal));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expr {
        let token = self.current.clone();
        let value = token.kind == TokenKind::True;
        Expr::new(ExprKind::BooleanLit(value), token)
    }

    fn parse_string_literal(&mut self) -> Expr {
        let token = self.current.clone();
        Expr::new(ExprKind::StringLit(token.literal.clone()), token)
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::new(
            ExprKind::Prefix {
                operator,
                right: Box::new(right),
            },
            token,
        ))
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::new(
            ExprKind::Infix {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
            token,
        ))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            token,
        ))
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expr::new(ExprKind::FunctionLit { parameters, body }, token))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(self.current.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(self.current.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::new(ExprKind::ArrayLit(elements), token))
    }

    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expr::new(ExprKind::HashLit(pairs), token))
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            token,
        ))
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expr::new(
            ExprKind::Index {
                left: Box::new(left),
                index: Box::new(index),
            },
            token,
        ))
    }

    /// Parses a comma-separated expression list terminated by `end`,
    /// starting with `current` on the opening delimiter and leaving it on
    /// `end` once done.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
