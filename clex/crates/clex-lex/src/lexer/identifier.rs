//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The finished text is looked up in the keyword
    /// table; only an exact match is a keyword.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::KEYWORDS;

    fn lex_ident(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.value(), "foo");
    }

    #[test]
    fn test_identifier_with_underscore() {
        let token = lex_ident("_privateField");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.value(), "_privateField");
    }

    #[test]
    fn test_identifier_with_digits() {
        assert_eq!(lex_ident("foo_bar_123").value(), "foo_bar_123");
    }

    #[test]
    fn test_every_keyword() {
        for &(spelling, kind) in KEYWORDS {
            let token = lex_ident(spelling);
            assert_eq!(token.kind(), kind, "{spelling}");
            assert_eq!(token.value(), spelling);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("classroom").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("iffy").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("int32").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("Return").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_unicode_letters() {
        let token = lex_ident("größe");
        assert_eq!(token.value(), "größe");
        assert_eq!(token.span().len(), "größe".len());
    }
}
