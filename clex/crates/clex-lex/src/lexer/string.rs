//! String literal lexing.
//!
//! Strings are double-quoted with no escape sequences. The token value is
//! the text between the quotes; the span includes the quotes.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// Everything up to the next `"` is taken verbatim, newlines included.
    /// If input ends first, the token still covers the rest of the source
    /// and [`LexError::UnterminatedString`] is returned alongside it.
    pub(crate) fn lex_string(&mut self) -> (Token, Option<LexError>) {
        self.cursor.advance();

        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');
        let content = self.cursor.slice_from(content_start);

        if self.cursor.match_char('"') {
            return (self.make_token(TokenKind::StringLiteral, content), None);
        }

        let token = self.make_token(TokenKind::StringLiteral, content);
        let err = LexError::UnterminatedString { span: token.span() };
        (token, Some(err))
    }
}
