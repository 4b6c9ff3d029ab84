//! `monkey` — a lexer, Pratt parser, and tree-walking evaluator for a
//! small dynamically-typed, expression-oriented scripting language.
//!
//! # Pipeline
//!
//! ```text
//! source -> Lexer -> Parser -> AST -> Evaluator -> Value
//! ```
//!
//! The library exposes one stage per pipeline step ([`lexer`], [`parser`],
//! [`ast`], [`eval`], [`object`], [`token`]) plus the convenience entry
//! point [`eval_source`], which runs the whole pipeline and reports parse
//! errors as a joined `Err(String)` instead of a `Value`.
//!
//! # Example
//!
//! ```
//! use monkey::object::Environment;
//!
//! let env = Environment::new();
//! let result = monkey::eval_source("let x = 5; x * 2", &env).unwrap();
//! assert_eq!(result.to_string(), "10");
//! ```

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use object::{Environment, Value};
use parser::Parser;

/// Parses and evaluates `source` against `env`.
///
/// Returns `Err` with one message per line if parsing failed — evaluation
/// never runs in that case, matching the separation between parse-time
/// and runtime errors in the error-handling design. A successful parse
/// always returns `Ok`, even if evaluation itself produced a guest-level
/// `Value::Error` — that error is a valid, inspectable return value, not
/// a host-level failure.
pub fn eval_source(source: &str, env: &Environment) -> Result<Value, Vec<String>> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        return Err(parser.errors);
    }

    Ok(eval::eval_program(&program, env))
}
