//! Unit tests for the parser.

use super::*;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};

/// Parses `input` and asserts there were no parse errors, returning the
/// resulting program.
pub(super) fn parse(input: &str) -> crate::ast::Program {
    let mut parser = Parser::new(input);
    let program = parser.parse_program();
    assert!(
        parser.errors.is_empty(),
        "unexpected parse errors for {:?}: {:?}",
        input,
        parser.errors
    );
    program
}

pub(super) fn first_expr(program: &crate::ast::Program) -> &Expr {
    match &program.statements[0].kind {
        StmtKind::ExpressionStmt(expr) => expr,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

pub(super) fn identifier_name(expr: &Expr) -> &str {
    match &expr.kind {
        ExprKind::Identifier(name) => name,
        other => panic!("expected identifier, got {:?}", other),
    }
}

pub(super) fn let_stmt(stmt: &Stmt) -> (&str, &Expr) {
    match &stmt.kind {
        StmtKind::Let { name, value } => (name, value),
        other => panic!("expected let statement, got {:?}", other),
    }
}

mod display_roundtrip;
mod stmt;
