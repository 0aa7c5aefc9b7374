//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-token dispatch and the
//! two pull operations: lenient [`Lexer::next_token`] and strict
//! [`Lexer::try_next_token`].

use std::iter::FusedIterator;

use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_ident_start};

/// Lexer for the clex language.
///
/// The lexer pulls tokens one at a time from a borrowed source string. Every
/// pass ends with exactly one [`TokenKind::Eof`] token.
///
/// # Example
///
/// ```
/// use clex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1;");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Identifier);
/// assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
///
/// let rest: Vec<_> = lexer.map(|t| t.kind()).collect();
/// assert_eq!(rest, [TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Optional sink for lenient-mode warnings.
    handler: Option<&'a Handler>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Number of tokens produced so far, EOF included.
    emitted: usize,

    /// Whether the EOF token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler: None,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            emitted: 0,
            finished: false,
        }
    }

    /// Attaches a handler that records a warning for each fallback
    /// character and each unterminated string in lenient mode.
    ///
    /// The token stream itself is unaffected.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::Lexer;
    /// use clex_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let tokens: Vec<_> = Lexer::new("a # b").with_handler(&handler).collect();
    ///
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn with_handler(mut self, handler: &'a Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Returns the next token, never failing.
    ///
    /// Characters that start no token become single-character
    /// [`TokenKind::Identifier`] tokens, and an unterminated string runs to
    /// end of input. Once input is exhausted every call returns EOF.
    pub fn next_token(&mut self) -> Token {
        let (token, problem) = self.scan();
        if let Some(err) = problem {
            self.warn(&err);
        }
        token
    }

    /// Returns the next token, or the error that lenient mode would have
    /// papered over.
    ///
    /// On error the offending input has still been consumed, so scanning
    /// can continue with the following call.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::{LexError, Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("a @ b");
    /// assert_eq!(lexer.try_next_token().unwrap().value(), "a");
    /// assert!(matches!(
    ///     lexer.try_next_token(),
    ///     Err(LexError::UnexpectedCharacter { ch: '@', .. })
    /// ));
    /// assert_eq!(lexer.try_next_token().unwrap().value(), "b");
    /// assert_eq!(lexer.try_next_token().unwrap().kind(), TokenKind::Eof);
    /// ```
    pub fn try_next_token(&mut self) -> LexResult<Token> {
        match self.scan() {
            (token, None) => Ok(token),
            (_, Some(err)) => {
                let span = err.span();
                tracing::debug!(
                    error = %err,
                    line = span.line,
                    column = span.column,
                    "strict lexing failed"
                );
                Err(err)
            },
        }
    }

    /// Scans one token.
    ///
    /// Returns the lenient token together with the strict-mode error, if
    /// the token only exists because of a fallback rule.
    fn scan(&mut self) -> (Token, Option<LexError>) {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            if !self.finished {
                tracing::debug!(tokens = self.emitted + 1, "reached end of input");
            }
            self.finished = true;
            return (self.make_token(TokenKind::Eof, ""), None);
        }

        let kind = match self.cursor.current_char() {
            c if is_digit(c) => return (self.lex_number(), None),
            '"' => return self.lex_string(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => match self.lex_ampersand() {
                Some(kind) => kind,
                None => return self.lex_fallback(),
            },
            '|' => match self.lex_pipe() {
                Some(kind) => kind,
                None => return self.lex_fallback(),
            },
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Multiply),
            '/' => self.single(TokenKind::Divide),
            '%' => self.single(TokenKind::Modulo),
            ';' => self.single(TokenKind::Semicolon),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            c if is_ident_start(c) => return (self.lex_identifier(), None),
            _ => return self.lex_fallback(),
        };

        let text = self.cursor.slice_from(self.token_start);
        (self.make_token(kind, text), None)
    }

    /// Consumes one character and returns `kind`.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Returns the span from the current token start to the cursor.
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token spanning from the current token start to the cursor.
    pub(crate) fn make_token(&mut self, kind: TokenKind, value: impl Into<String>) -> Token {
        let token = Token::new(kind, value, self.current_span());
        self.emitted += 1;
        tracing::trace!(
            kind = %token.kind(),
            value = token.value(),
            line = token.line(),
            column = token.column(),
            "token"
        );
        token
    }

    /// Records the lenient-mode warning for `err`, if a handler is attached.
    fn warn(&self, err: &LexError) {
        let Some(handler) = self.handler else {
            return;
        };

        let (message, code) = match err {
            LexError::UnexpectedCharacter { ch, .. } => (
                format!("unexpected character {ch:?} treated as an identifier"),
                DiagnosticCode::W_LEXER_FALLBACK_CHAR,
            ),
            LexError::UnterminatedString { .. } => (
                "unterminated string literal runs to end of input".to_string(),
                DiagnosticCode::W_LEXER_UNTERMINATED_STRING,
            ),
        };

        DiagnosticBuilder::warning(message)
            .code(code)
            .span(err.span())
            .emit(handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the EOF token has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token including the final EOF, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_> {}
