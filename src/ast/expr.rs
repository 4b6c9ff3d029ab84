//! Expression nodes for the Monkey AST.

use crate::token::Token;

use super::stmt::Block;

/// The kind of an expression, without its originating token.
///
/// Use [`Expr`] for the full AST node.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A variable reference, e.g. `foobar`.
    Identifier(String),

    /// An integer literal, e.g. `5`.
    IntegerLit(i64),

    /// A boolean literal, `true` or `false`.
    BooleanLit(bool),

    /// A string literal, e.g. `"hello world"`. No escape processing beyond
    /// what the lexer already did (none).
    StringLit(String),

    /// An array literal, e.g. `[1, 2 * 2, 3 + 3]`.
    ArrayLit(Vec<Expr>),

    /// A hash literal, e.g. `{"one": 1, "two": 2}`.
    ///
    /// Pairs are kept in source order; keys are arbitrary expressions,
    /// evaluated at runtime, not restricted to literals.
    HashLit(Vec<(Expr, Expr)>),

    /// A prefix expression, e.g. `-5` or `!true`.
    ///
    /// `operator` is one of `!` or `-`, per the fixed operator set.
    Prefix { operator: String, right: Box<Expr> },

    /// An infix expression, e.g. `5 + 5`.
    ///
    /// `operator` is one of `+ - * / < > == !=`.
    Infix {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// A conditional expression: `if (cond) { ... } else { ... }`.
    ///
    /// Monkey has no statement/expression distinction for `if` — it always
    /// produces a value, with the missing branch evaluating to `Null`.
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },

    /// A function literal: `fn(x, y) { x + y; }`.
    FunctionLit {
        parameters: Vec<String>,
        body: Block,
    },

    /// A call expression: `add(1, 2 * 3)`.
    ///
    /// `function` is itself an expression so that `fn(x) { x }(5)` and
    /// `callbacks[0](1, 2)` both parse.
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// An index expression: `arr[0]` or `hash["key"]`.
    Index { left: Box<Expr>, index: Box<Expr> },
}

/// An expression node: its kind, plus the token it started from.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub token: Token,
}

impl Expr {
    /// Creates a new expression from a kind and its leading token.
    pub fn new(kind: ExprKind, token: Token) -> Self {
        Expr { kind, token }
    }
}
