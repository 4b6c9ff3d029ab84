//! Statement and block evaluation.

use crate::ast::{Block, Stmt, StmtKind};
use crate::object::{Environment, Value};

use super::expr::eval_expression;

/// Evaluates one statement, producing its result value.
///
/// `let` and a plain expression statement both "return" the expression's
/// value; `let` additionally binds it in `env`. Callers that only care
/// about side effects (the top-level program loop, block evaluation)
/// only inspect the result to detect `ReturnValue`/`Error` sentinels.
pub(super) fn eval_statement(stmt: &Stmt, env: &Environment) -> Value {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.set(name.clone(), value);
            Value::Null
        }
        StmtKind::Return(value) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Value::ReturnValue(Box::new(value))
        }
        StmtKind::ExpressionStmt(expr) => eval_expression(expr, env),
    }
}

/// Evaluates a block's statements in order.
///
/// Unlike [`super::eval_program`], a `ReturnValue` is returned *without*
/// unwrapping — the caller (a function call, or a nested block) is
/// responsible for deciding when the return has finally reached its
/// function boundary. This is what lets `return` inside a nested `if`
/// unwind through every enclosing block up to the call site.
pub(super) fn eval_block(block: &Block, env: &Environment) -> Value {
    let mut result = Value::Null;

    for stmt in block {
        result = eval_statement(stmt, env);

        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}
