//! Number literal lexing.
//!
//! Only decimal integers exist. The value is kept as text; a run of digits
//! of any length is one token.

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits.
    ///
    /// `12.5` is therefore `12`, `.`, `5` and `123abc` is `123`, `abc`.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.advance_while(is_digit);

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(TokenKind::Number, text)
    }
}
