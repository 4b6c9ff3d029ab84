//! Runtime values produced by the evaluator.
//!
//! This module defines [`Value`], the tagged union every evaluated
//! expression reduces to, along with the supporting [`HashKey`]/`Hashable`
//! protocol and the [`Environment`] chain that backs variable scoping and
//! closures.
//!
//! # Module Structure
//!
//! - [`environment`] - The `Environment` chain and closure capture
//! - [`hashable`] - `HashKey` and the `Hashable` trait
//! - [`display`] - Value stringification (`Integer → decimal`, etc.)
//!
//! # See Also
//!
//! * [`crate::eval`] - Produces and consumes `Value`s.
//! * [`crate::ast`] - The syntax a `Function` value closes over.

mod display;
mod environment;
mod hashable;


pub use environment::Environment;
pub use hashable::{HashKey, Hashable};

use std::fmt;
use std::rc::Rc;

use crate::ast::Stmt;

/// The type tag printed in error messages, e.g. `"unknown operator: -BOOLEAN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    Boolean,
    String,
    Null,
    Array,
    Hash,
    Function,
    Builtin,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TypeTag::*;
        let name = match self {
            Integer => "INTEGER",
            Boolean => "BOOLEAN",
            String => "STRING",
            Null => "NULL",
            Array => "ARRAY",
            Hash => "HASH",
            Function => "FUNCTION",
            Builtin => "BUILTIN",
        };
        write!(f, "{}", name)
    }
}

/// A native function registered in the builtin table. Takes the fully
/// evaluated argument list and returns a `Value` — an `Error` value on
/// failure, never a propagated Rust error.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A hash entry: the original key value (for iteration/display) paired
/// with its value. Keyed internally by [`HashKey`].
#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// The runtime value produced by evaluating any Monkey expression.
///
/// `ReturnValue` and `Error` are sentinels: they only ever appear as the
/// transient result of evaluating a statement or block, never as an
/// array element, hash key/value, or function argument.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    Array(Rc<Vec<Value>>),
    Hash(Rc<std::collections::HashMap<HashKey, HashPair>>),
    Function {
        parameters: Rc<Vec<String>>,
        body: Rc<Vec<Stmt>>,
        env: Environment,
    },
    Builtin(BuiltinFn),
    /// Wraps the value produced by a `return` statement so it can unwind
    /// through nested blocks without being mistaken for the block's own
    /// last-statement value.
    ReturnValue(Box<Value>),
    /// A runtime error. Short-circuits evaluation: once produced, it
    /// propagates up through every enclosing expression and statement
    /// unexamined.
    Error(String),
}

impl Value {
    /// The type tag used in error messages and the `len`/`first`/etc.
    /// builtin argument checks.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::String(_) => TypeTag::String,
            Value::Null => TypeTag::Null,
            Value::Array(_) => TypeTag::Array,
            Value::Hash(_) => TypeTag::Hash,
            Value::Function { .. } => TypeTag::Function,
            Value::Builtin(_) => TypeTag::Builtin,
            // Sentinels never escape far enough for their tag to matter,
            // but a tag is still required to keep this function total.
            Value::ReturnValue(inner) => inner.type_tag(),
            Value::Error(_) => TypeTag::String,
        }
    }

    /// Truthiness per the evaluator's `if`/`!` rules: `NULL` and `FALSE`
    /// are falsy, everything else (including `0` and `""`) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// `true` if this value is a runtime `Error`.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Convenience constructor for an `Error` value with a formatted message.
    pub fn error(msg: impl Into<String>) -> Value {
        Value::Error(msg.into())
    }
}
