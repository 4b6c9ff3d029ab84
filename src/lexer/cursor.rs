//! Character-level navigation for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Advances the cursor by one character.
    ///
    /// Per the spec's §9 note on the reference implementation, `peek_char`
    /// reads `position + 1` directly rather than tracking a separate
    /// `read_position`; this is equivalent but less clear, so this lexer
    /// keeps an explicit `read_pos` and uses it for both `advance` and
    /// `peek_char`.
    pub(super) fn advance(&mut self) {
        self.pos = self.read_pos;
        self.ch = self.input[self.read_pos..].chars().next();
        if let Some(c) = self.ch {
            self.read_pos += c.len_utf8();
        }
    }

    /// Returns the character one past the current one, without advancing.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.input[self.read_pos..].chars().next()
    }
}
