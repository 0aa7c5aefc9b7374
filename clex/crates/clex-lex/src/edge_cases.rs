//! Edge case tests for clex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_strict, LexError, Token, TokenKind};
    use clex_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).filter(|t| !t.is_eof()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n\n  ").is_empty());
        let eof = tokenize(" \n\n  ").last().unwrap();
        assert_eq!((eof.line(), eof.column()), (3, 3));
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].value(), "x");
    }

    #[test]
    fn test_edge_lone_underscore() {
        let t = lex_all("_");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].value(), "_");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].value(), name);
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("class if while");
        assert_eq!(t[0].kind(), TokenKind::Class);
        assert_eq!(t[1].kind(), TokenKind::If);
        assert_eq!(t[2].kind(), TokenKind::While);
    }

    #[test]
    fn test_edge_keyword_glued_to_punctuation() {
        let t = lex_all("return;");
        assert_eq!(t[0].kind(), TokenKind::Return);
        assert_eq!(t[1].kind(), TokenKind::Semicolon);
    }

    #[test]
    fn test_edge_digit_then_letters() {
        let t = lex_all("123abc");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind(), TokenKind::Number);
        assert_eq!(t[1].kind(), TokenKind::Identifier);
        assert_eq!(t[1].value(), "abc");
    }

    #[test]
    fn test_edge_negative_number() {
        let t = lex_all("-5");
        assert_eq!(t[0].kind(), TokenKind::Minus);
        assert_eq!(t[1].kind(), TokenKind::Number);
    }

    #[test]
    fn test_edge_unterminated_string_runs_to_end() {
        let t = lex_all("x = \"abc");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].kind(), TokenKind::StringLiteral);
        assert_eq!(t[2].value(), "abc");
        assert_eq!(t[2].position(), 4);
        assert_eq!(t[2].column(), 5);
    }

    #[test]
    fn test_edge_unterminated_string_swallows_newlines() {
        let source = "\"abc\nint y;";
        let tokens: Vec<_> = tokenize(source).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value(), "abc\nint y;");
        assert_eq!(tokens[1].position(), source.len());
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_edge_string_containing_keyword() {
        let t = lex_all("\"class\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::StringLiteral);
        assert_eq!(t[0].value(), "class");
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("\"a\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].position(), 3);
        assert_eq!(t[1].column(), 4);
    }

    #[test]
    fn test_edge_unknown_characters() {
        let t = lex_all("# @ $ [ ] ~ ^ : ?");
        assert_eq!(t.len(), 9);
        assert!(t.iter().all(|t| t.kind() == TokenKind::Identifier));
        assert!(t.iter().all(|t| t.value().chars().count() == 1));
    }

    #[test]
    fn test_edge_nul_character() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].value(), "\0");
        assert_eq!(t[2].value(), "b");
    }

    #[test]
    fn test_edge_non_ascii_identifier() {
        let t = lex_all("café = 1");
        assert_eq!(t[0].value(), "café");
        assert_eq!(t[1].position(), 6);
        assert_eq!(t[1].column(), 6);
    }

    #[test]
    fn test_edge_non_ascii_decimal_digits_are_number() {
        let t = lex_all("٣٤");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Number);
        assert_eq!(t[0].value(), "٣٤");
    }

    #[test]
    fn test_edge_superscript_splits_identifier() {
        let t = lex_all("x²");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].value(), "x");
        assert_eq!(t[1].kind(), TokenKind::Identifier);
        assert_eq!(t[1].value(), "²");
        assert_eq!(t[1].column(), 2);
    }

    #[test]
    fn test_edge_letter_number_is_fallback() {
        let t = lex_all("Ⅷa");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].value(), "Ⅷ");
        assert_eq!(t[1].value(), "a");
    }

    #[test]
    fn test_edge_emoji_fallback() {
        let t = lex_all("x🦀y");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].value(), "🦀");
        assert_eq!(t[2].position(), 5);
        assert_eq!(t[2].column(), 3);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].line(), 2);
        assert_eq!(t[1].column(), 1);
        assert_eq!(t[1].position(), 3);
    }

    #[test]
    fn test_edge_unicode_whitespace() {
        let t = lex_all("a\u{00A0}b\u{2003}c");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].column(), 5);
    }

    #[test]
    fn test_edge_trailing_operator_prefixes() {
        for (source, kind) in [
            ("=", TokenKind::Assign),
            ("!", TokenKind::Not),
            ("<", TokenKind::Less),
            (">", TokenKind::Greater),
        ] {
            let t = lex_all(source);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].kind(), kind);
        }
    }

    #[test]
    fn test_edge_trailing_ampersand() {
        let handler = Handler::new();
        let tokens: Vec<_> = tokenize("a &").with_handler(&handler).collect();
        assert_eq!(tokens[1].value(), "&");
        assert_eq!(handler.warning_count(), 1);
        assert!(matches!(
            tokenize_strict("a &"),
            Err(LexError::UnexpectedCharacter { ch: '&', .. })
        ));
    }

    #[test]
    fn test_edge_strict_reports_first_error() {
        let err = tokenize_strict("# \"open").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: '#', .. }));
    }
}
