//! Operator lexing.
//!
//! Two-character operators are tried before their one-character prefix.
//! `&` and `|` only exist doubled; a lone one falls through to the
//! fallback rule, which also lives here.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Equals
        } else {
            TokenKind::Assign
        }
    }

    /// Lexes not or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEquals
        } else {
            TokenKind::Not
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    /// Lexes logical and.
    ///
    /// Handles: `&&`. Consumes nothing and returns `None` for a lone `&`.
    pub(crate) fn lex_ampersand(&mut self) -> Option<TokenKind> {
        self.lex_doubled('&', TokenKind::And)
    }

    /// Lexes logical or.
    ///
    /// Handles: `||`. Consumes nothing and returns `None` for a lone `|`.
    pub(crate) fn lex_pipe(&mut self) -> Option<TokenKind> {
        self.lex_doubled('|', TokenKind::Or)
    }

    fn lex_doubled(&mut self, c: char, kind: TokenKind) -> Option<TokenKind> {
        if self.cursor.peek_char(1) == c {
            self.cursor.advance_n(2);
            Some(kind)
        } else {
            None
        }
    }

    /// Consumes one character that starts no token.
    ///
    /// The lenient token is an [`TokenKind::Identifier`] holding just that
    /// character; the paired error is what strict mode reports.
    pub(crate) fn lex_fallback(&mut self) -> (Token, Option<LexError>) {
        let ch = self.cursor.current_char();
        self.cursor.advance();

        let token = self.make_token(TokenKind::Identifier, ch);
        let err = LexError::UnexpectedCharacter {
            ch,
            span: token.span(),
        };
        (token, Some(err))
    }
}
