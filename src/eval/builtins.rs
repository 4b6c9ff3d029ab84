//! The built-in function table: `len`, `first`, `last`, `rest`, `push`,
//! `puts`. Consulted by identifier lookup only after the environment
//! chain has already missed, so a user binding named `len` shadows the
//! built-in.

use std::rc::Rc;

use crate::object::{BuiltinFn, Value};

/// Looks up a name in the built-in table, returning its native function
/// if found.
pub(super) fn lookup(name: &str) -> Option<BuiltinFn> {
    match name {
        "len" => Some(len),
        "first" => Some(first),
        "last" => Some(last),
        "rest" => Some(rest),
        "push" => Some(push),
        "puts" => Some(puts),
        _ => None,
    }
}

fn wrong_arity(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments. got={}, want={}", got, want))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.chars().count() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!(
            "argument to 'len' not supported, got {}",
            other.type_tag()
        )),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::error(format!(
            "argument to 'first' must be ARRAY, got {}",
            other.type_tag()
        )),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::error(format!(
            "argument to 'last' must be ARRAY, got {}",
            other.type_tag()
        )),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Value::error(format!(
            "argument to 'rest' must be ARRAY, got {}",
            other.type_tag()
        )),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.as_ref().clone();
            new_elements.push(args[1].clone());
            Value::Array(Rc::new(new_elements))
        }
        other => Value::error(format!(
            "argument to 'push' must be ARRAY, got {}",
            other.type_tag()
        )),
    }
}

fn puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{}", arg);
    }
    Value::Null
}
