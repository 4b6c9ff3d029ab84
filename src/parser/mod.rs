//! Parser for the Monkey programming language.
//!
//! This module provides the [`Parser`] struct, a Pratt (operator-precedence)
//! recursive-descent parser that turns a token stream into a [`Program`].
//!
//! # Overview
//!
//! The parser holds exactly one token of lookahead (`peek`) beyond the
//! token it is currently looking at (`current`). Expression parsing
//! dispatches on token kind through two small tables: a prefix parser for
//! the token that starts an expression, and an infix parser for the token
//! that continues one — see [`expr`].
//!
//! Unlike a fail-fast parser, this one never aborts on a syntax error: it
//! records a message in `errors` and keeps going, producing a best-effort
//! AST. Callers should check `errors` before trusting the result.
//!
//! # Grammar
//!
//! ```text
//! program   = statement*
//! statement = "let" IDENT "=" expr ";"?
//!           | "return" expr ";"?
//!           | expr ";"?
//! expr      = pratt-parsed over the precedence ladder in crate::token
//! block     = "{" statement* "}"
//! fn        = "fn" "(" (IDENT ("," IDENT)*)? ")" block
//! call      = expr "(" (expr ("," expr)*)? ")"
//! index     = expr "[" expr "]"
//! array     = "[" (expr ("," expr)*)? "]"
//! hash      = "{" (expr ":" expr ("," expr ":" expr)*)? "}"
//! ```
//!
//! # Module Structure
//!
//! - `helpers` - Token navigation and `expect_peek`
//! - `stmt` - Statement parsing
//! - `expr` - Pratt expression parsing (prefix/infix dispatch)
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser.
//! * [`crate::ast`] - Defines the AST types produced by the parser.
//! * [`crate::eval`] - Consumes the AST to produce runtime values.

mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::Token;

/// A Pratt parser for the Monkey language.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    /// Accumulated parse error messages, in the order they were raised.
    /// The parser never stops on the first one.
    pub errors: Vec<String>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over `input`, priming `current`/`peek` with the
    /// first two tokens.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// Always returns a `Program`, even if `errors` ends up non-empty —
    /// the caller decides whether to evaluate a program with parse errors
    /// (the reference CLI does not).
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();
        while self.current.kind != crate::token::TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        program
    }
}
