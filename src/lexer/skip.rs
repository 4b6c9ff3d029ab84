//! Whitespace skipping.
//!
//! Monkey has no comment syntax, unlike the teacher language's `//` line
//! comments, so this module only has whitespace to deal with.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes spaces, tabs, carriage returns, and newlines.
    pub(super) fn skip_whitespace(&mut self) {
        while let Some(c) = self.ch {
            if c == ' ' || c == '\t' || c == '\n' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }
}
