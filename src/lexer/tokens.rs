//! Token recognition: the main character dispatch, plus the
//! identifier/number/string readers.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Recognizes and consumes exactly one token starting at the current
    /// character. Assumes leading whitespace has already been skipped.
    pub(super) fn scan_token(&mut self) -> Token {
        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, "");
        };

        let tok = match ch {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    self.advance();
                    return Token::new(TokenKind::Eq, "==");
                }
                Token::new(TokenKind::Assign, "=")
            }
            '+' => Token::new(TokenKind::Plus, "+"),
            '-' => Token::new(TokenKind::Minus, "-"),
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    self.advance();
                    return Token::new(TokenKind::NotEq, "!=");
                }
                Token::new(TokenKind::Bang, "!")
            }
            '/' => Token::new(TokenKind::Slash, "/"),
            '*' => Token::new(TokenKind::Asterisk, "*"),
            '<' => Token::new(TokenKind::Lt, "<"),
            '>' => Token::new(TokenKind::Gt, ">"),
            ';' => Token::new(TokenKind::Semicolon, ";"),
            ':' => Token::new(TokenKind::Colon, ":"),
            ',' => Token::new(TokenKind::Comma, ","),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '{' => Token::new(TokenKind::LBrace, "{"),
            '}' => Token::new(TokenKind::RBrace, "}"),
            '[' => Token::new(TokenKind::LBracket, "["),
            ']' => Token::new(TokenKind::RBracket, "]"),
            '"' => {
                let literal = self.read_string();
                return Token::new(TokenKind::Str, literal);
            }
            c if is_letter(c) => {
                let literal = self.read_identifier();
                let kind = TokenKind::lookup_ident(&literal);
                return Token::new(kind, literal);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal);
            }
            other => Token::new(TokenKind::Illegal, other.to_string()),
        };

        self.advance();
        tok
    }

    /// Reads `[A-Za-z_]+` starting at the current character.
    pub(super) fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.ch {
            if is_letter(c) {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    /// Reads `[0-9]+` starting at the current character.
    pub(super) fn read_number(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.ch {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    /// Reads the payload of a string literal, starting at the opening `"`.
    ///
    /// Consumes through the closing `"`, or through EOF if the string is
    /// never closed — no error is raised either way, matching the spec's
    /// edge case for unterminated strings.
    pub(super) fn read_string(&mut self) -> String {
        self.advance(); // consume opening quote
        let start = self.pos;
        while let Some(c) = self.ch {
            if c == '"' {
                break;
            }
            self.advance();
        }
        let literal = self.input[start..self.pos].to_string();
        if self.ch == Some('"') {
            self.advance(); // consume closing quote
        }
        literal
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
