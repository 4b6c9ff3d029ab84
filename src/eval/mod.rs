//! The tree-walking evaluator.
//!
//! [`eval_program`] walks a [`Program`] against an [`Environment`],
//! dispatching on AST variant to produce a [`Value`]. The central
//! discipline is error short-circuiting: after evaluating any
//! subexpression, an `Error` result is propagated upward immediately
//! rather than folded into further computation.
//!
//! # Module Structure
//!
//! - [`stmt`] - Statement and program/block evaluation
//! - [`expr`] - Expression evaluation (literals, operators, calls, index)
//! - [`builtins`] - The six registered native functions
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree being walked.
//! * [`crate::object`] - The `Value` model and `Environment` chain.

mod builtins;
mod expr;
mod stmt;

#[cfg(test)]
mod tests;

use crate::ast::Program;
use crate::object::{Environment, Value};

/// Evaluates a full program in `env`, returning the value of its last
/// statement (unwrapping a trailing `return`), or an `Error` value if
/// evaluation failed anywhere along the way.
pub fn eval_program(program: &Program, env: &Environment) -> Value {
    let mut result = Value::Null;

    for stmt in &program.statements {
        result = stmt::eval_statement(stmt, env);

        match result {
            Value::ReturnValue(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}
