//! Expression evaluation: literals, operators, conditionals, calls, index.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::{Expr, ExprKind};
use crate::object::{Environment, HashPair, Hashable, TypeTag, Value};

use super::builtins;
use super::stmt::eval_block;

/// Evaluates a single expression.
pub(super) fn eval_expression(expr: &Expr, env: &Environment) -> Value {
    match &expr.kind {
        ExprKind::IntegerLit(value) => Value::Integer(*value),
        ExprKind::BooleanLit(value) => Value::Boolean(*value),
        ExprKind::StringLit(value) => Value::String(Rc::from(value.as_str())),

        ExprKind::Identifier(name) => eval_identifier(name, env),

        ExprKind::ArrayLit(elements) => {
            let values = match eval_expressions(elements, env) {
                Ok(values) => values,
                Err(err) => return err,
            };
            Value::Array(Rc::new(values))
        }

        ExprKind::HashLit(pairs) => eval_hash_literal(pairs, env),

        ExprKind::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }

        ExprKind::Infix {
            operator,
            left,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }

        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),

        ExprKind::FunctionLit { parameters, body } => Value::Function {
            parameters: Rc::new(parameters.clone()),
            body: Rc::new(body.clone()),
            env: env.clone(),
        },

        ExprKind::Call {
            function,
            arguments,
        } => eval_call_expression(function, arguments, env),

        ExprKind::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

/// Evaluates each expression in order, short-circuiting on the first
/// `Error` by returning it directly (the remaining arguments are never
/// evaluated, matching the call-argument evaluation rule).
fn eval_expressions(exprs: &[Expr], env: &Environment) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Environment) -> Value {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Value::error(format!("unusable as hash key: {}", key.type_tag())),
        };

        map.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(Rc::new(map))
}

fn eval_identifier(name: &str, env: &Environment) -> Value {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Value::Builtin(builtin);
    }
    Value::error(format!("identifier not found: {}", name))
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => Value::Boolean(!right.is_truthy()),
        "-" => match right {
            Value::Integer(value) => Value::Integer(-value),
            other => Value::error(format!("unknown operator: -{}", other.type_tag())),
        },
        other => Value::error(format!(
            "unknown operator: {}{}",
            other,
            right.type_tag()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => Value::Boolean(identity_eq(&left, &right)),
        _ if operator == "!=" => Value::Boolean(!identity_eq(&left, &right)),
        _ if left.type_tag() != right.type_tag() => Value::error(format!(
            "type mismatch: {} {} {}",
            left.type_tag(),
            operator,
            right.type_tag()
        )),
        _ => Value::error(format!(
            "unknown operator: {} {} {}",
            left.type_tag(),
            operator,
            right.type_tag()
        )),
    }
}

/// Compares by scalar identity: since `TRUE`/`FALSE`/`NULL` never carry
/// distinct payloads, comparing the unwrapped value is equivalent to
/// singleton pointer equality.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Integer(l), Value::Integer(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        _ => false,
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => Value::Integer(left / right),
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        other => Value::error(format!(
            "unknown operator: {} {} {}",
            TypeTag::Integer,
            other,
            TypeTag::Integer
        )),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(Rc::from(format!("{}{}", left, right))),
        other => Value::error(format!(
            "unknown operator: {} {} {}",
            TypeTag::String,
            other,
            TypeTag::String
        )),
    }
}

fn eval_if_expression(
    condition: &Expr,
    consequence: &crate::ast::Block,
    alternative: Option<&crate::ast::Block>,
    env: &Environment,
) -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_call_expression(function: &Expr, arguments: &[Expr], env: &Environment) -> Value {
    let callee = eval_expression(function, env);
    if callee.is_error() {
        return callee;
    }

    let args = match eval_expressions(arguments, env) {
        Ok(args) => args,
        Err(err) => return err,
    };

    apply_function(callee, &args)
}

fn apply_function(callee: Value, args: &[Value]) -> Value {
    match callee {
        Value::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::enclosed(env);
            for (name, value) in parameters.iter().zip(args) {
                call_env.set(name.clone(), value.clone());
            }
            let result = eval_block(&body, &call_env);
            match result {
                Value::ReturnValue(inner) => *inner,
                other => other,
            }
        }
        Value::Builtin(native) => native(args),
        other => Value::error(format!("not a function: {}", other.type_tag())),
    }
}

fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Value::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Value::Hash(map), _) => {
            let hash_key = match index.hash_key() {
                Some(hash_key) => hash_key,
                None => {
                    return Value::error(format!("unusable as hash key: {}", index.type_tag()))
                }
            };
            match map.get(&hash_key) {
                Some(HashPair { value, .. }) => value.clone(),
                None => Value::Null,
            }
        }
        _ => Value::error(format!(
            "index operator not supported {}",
            left.type_tag()
        )),
    }
}

