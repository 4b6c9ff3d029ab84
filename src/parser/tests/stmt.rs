//! Tests for `let`, `return`, and expression statements.

use super::*;

#[test]
fn let_statements_bind_name_to_value() {
    let program = parse("let x = 5; let y = true; let foobar = y;");
    assert_eq!(program.statements.len(), 3);

    let (name, value) = let_stmt(&program.statements[0]);
    assert_eq!(name, "x");
    assert_eq!(value.to_string(), "5");

    let (name, value) = let_stmt(&program.statements[1]);
    assert_eq!(name, "y");
    assert_eq!(value.to_string(), "true");

    let (name, _) = let_stmt(&program.statements[2]);
    assert_eq!(name, "foobar");
}

#[test]
fn let_statement_without_trailing_semicolon() {
    let program = parse("let x = 5");
    assert_eq!(program.statements.len(), 1);
    let (name, value) = let_stmt(&program.statements[0]);
    assert_eq!(name, "x");
    assert_eq!(value.to_string(), "5");
}

#[test]
fn return_statements() {
    let program = parse("return 5; return 10; return 993322;");
    assert_eq!(program.statements.len(), 3);
    for stmt in &program.statements {
        match &stmt.kind {
            StmtKind::Return(_) => {}
            other => panic!("expected return statement, got {:?}", other),
        }
    }
}

#[test]
fn expression_statement_is_a_bare_identifier() {
    let program = parse("foobar;");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(identifier_name(first_expr(&program)), "foobar");
}

#[test]
fn multiple_statements_separated_by_semicolons() {
    let program = parse("let a = 1; a; return a;");
    assert_eq!(program.statements.len(), 3);
}
