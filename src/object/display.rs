//! Value stringification, used by `puts` and the REPL's printed results.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }
            Value::Function {
                parameters, body, ..
            } => {
                write!(f, "fn({}) {{  ", parameters.join(", "))?;
                for stmt in body.iter() {
                    write!(f, "{}", stmt)?;
                }
                write!(f, "  }}")
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::ReturnValue(inner) => write!(f, "{}", inner),
            Value::Error(msg) => write!(f, "ERROR: {}", msg),
        }
    }
}
