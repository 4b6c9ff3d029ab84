//! Canonical stringification of AST nodes.
//!
//! This is the `to_string` form exercised by the parser's
//! operator-precedence tests: it fully parenthesizes prefix and infix
//! expressions so that precedence decisions made during parsing are
//! visible in the output.

use std::fmt;

use super::expr::{Expr, ExprKind};
use super::program::Program;
use super::stmt::{Stmt, StmtKind};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {};", name, value),
            StmtKind::Return(value) => write!(f, "return {};", value),
            StmtKind::ExpressionStmt(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::IntegerLit(value) => write!(f, "{}", value),
            ExprKind::BooleanLit(value) => write!(f, "{}", value),
            ExprKind::StringLit(value) => write!(f, "{}", value),
            ExprKind::ArrayLit(elements) => {
                write!(f, "[")?;
                write_comma_separated(f, elements)?;
                write!(f, "]")
            }
            ExprKind::HashLit(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
            ExprKind::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            ExprKind::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {} {{ ", condition)?;
                for stmt in consequence {
                    write!(f, "{}", stmt)?;
                }
                write!(f, " }}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {{ ")?;
                    for stmt in alt {
                        write!(f, "{}", stmt)?;
                    }
                    write!(f, " }}")?;
                }
                Ok(())
            }
            ExprKind::FunctionLit { parameters, body } => {
                write!(f, "fn({}) {{ ", parameters.join(", "))?;
                for stmt in body {
                    write!(f, "{}", stmt)?;
                }
                write!(f, " }}")
            }
            ExprKind::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function)?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            }
            ExprKind::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    Ok(())
}
