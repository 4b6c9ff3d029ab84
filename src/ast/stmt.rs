//! Statement nodes for the Monkey AST.

use crate::token::Token;

use super::expr::Expr;

/// The kind of a statement, without its originating token.
///
/// Use [`Stmt`] for the full AST node.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// `let <name> = <value>;`
    Let { name: String, value: Expr },

    /// `return <value>;`
    Return(Expr),

    /// An expression evaluated for its value, with the trailing `;`
    /// optional — `5 + 5` is a complete program on its own.
    ExpressionStmt(Expr),
}

/// A brace-delimited sequence of statements, as found in function bodies
/// and `if`/`else` branches. Not itself a free-standing statement kind —
/// Monkey has no bare `{ ... }` statement outside those two contexts —
/// so it's carried inline as a field rather than wrapped in its own
/// [`Stmt`] node.
pub type Block = Vec<Stmt>;

/// A statement node: its kind, plus the token it started from.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub token: Token,
}

impl Stmt {
    /// Creates a new statement from a kind and its leading token.
    pub fn new(kind: StmtKind, token: Token) -> Self {
        Stmt { kind, token }
    }
}
