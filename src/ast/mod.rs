//! Abstract syntax tree for Monkey programs.
//!
//! The AST produced by [`crate::parser`] is a tagged tree: one enum for
//! statements, one for expressions, each node also carrying the [`Token`]
//! it started from (used for stringification and diagnostics, never for
//! source-location reporting — this interpreter tracks no spans).
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes ([`Expr`]/[`ExprKind`])
//! - [`stmt`] - Statement nodes ([`Stmt`]/[`StmtKind`])
//! - [`program`] - The root [`Program`] node
//! - [`display`] - Canonical `to_string` stringification used by the
//!   parser's operator-precedence tests
//!
//! # See Also
//!
//! * [`crate::parser`] - Builds the AST from a token stream.
//! * [`crate::eval`] - Walks the AST to produce runtime values.

mod display;
mod expr;
mod program;
mod stmt;


pub use expr::{Expr, ExprKind};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
