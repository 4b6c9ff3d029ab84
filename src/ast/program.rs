//! The root AST node.

use super::stmt::Stmt;

/// The root node of every parsed Monkey program: an ordered sequence of
/// top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Program::default()
    }
}
