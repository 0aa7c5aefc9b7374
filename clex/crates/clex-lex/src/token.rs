//! Token definitions for the clex language.
//!
//! A [`Token`] pairs a [`TokenKind`] with its lexeme and the [`Span`] it was
//! read from. Kinds form a closed set; every kind has a canonical
//! upper-snake name used for display and JSON output.

use std::fmt;

use clex_util::Span;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The kind of a token.
///
/// `Increment` and `Decrement` are reserved names. The lexer never produces
/// them; `++` scans as two `Plus` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// End of input.
    Eof,

    // ==================== KEYWORDS ====================
    /// `class`
    Class,
    /// `if`
    If,
    /// `while`
    While,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `int`
    Int,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `public`
    Public,
    /// `private`
    Private,
    /// `static`
    Static,

    // ==================== LITERALS ====================
    /// Identifier, or a single character no other rule accepts.
    Identifier,
    /// Decimal integer literal.
    Number,
    /// Double-quoted string literal; the value excludes the quotes.
    StringLiteral,

    // ==================== OPERATORS ====================
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// `++` (reserved)
    Increment,
    /// `--` (reserved)
    Decrement,

    // ==================== DELIMITERS ====================
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
}

impl TokenKind {
    /// Returns the canonical upper-snake name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::StringLiteral.name(), "STRING_LITERAL");
    /// assert_eq!(TokenKind::Eof.name(), "EOF");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Class => "CLASS",
            TokenKind::If => "IF",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::Void => "VOID",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Bool => "BOOL",
            TokenKind::Public => "PUBLIC",
            TokenKind::Private => "PRIVATE",
            TokenKind::Static => "STATIC",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
        }
    }

    /// Returns true if this is a reserved keyword.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Void
                | TokenKind::Int
                | TokenKind::String
                | TokenKind::Bool
                | TokenKind::Public
                | TokenKind::Private
                | TokenKind::Static
        )
    }

    /// Returns true if this is an arithmetic, comparison, logical or
    /// assignment operator.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Increment
                | TokenKind::Decrement
        )
    }

    /// Returns true if this is a brace, parenthesis or separator.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::Dot
        )
    }

    /// Returns true for number and string literals.
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::StringLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyword spellings and the kinds they map to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("class", TokenKind::Class),
    ("if", TokenKind::If),
    ("while", TokenKind::While),
    ("return", TokenKind::Return),
    ("void", TokenKind::Void),
    ("int", TokenKind::Int),
    ("string", TokenKind::String),
    ("bool", TokenKind::Bool),
    ("public", TokenKind::Public),
    ("private", TokenKind::Private),
    ("static", TokenKind::Static),
];

/// Looks up the keyword kind for an identifier.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use clex_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("classroom"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "class" => Some(TokenKind::Class),
        "if" => Some(TokenKind::If),
        "while" => Some(TokenKind::While),
        "return" => Some(TokenKind::Return),
        "void" => Some(TokenKind::Void),
        "int" => Some(TokenKind::Int),
        "string" => Some(TokenKind::String),
        "bool" => Some(TokenKind::Bool),
        "public" => Some(TokenKind::Public),
        "private" => Some(TokenKind::Private),
        "static" => Some(TokenKind::Static),
        _ => None,
    }
}

/// A single lexical token.
///
/// Tokens are immutable once created. The span's `start` is the token's
/// byte position; for string literals the span covers the quotes while
/// [`Token::value`] holds only the enclosed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: String,
    span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Returns the token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's lexeme.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the source span the token was read from.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the 0-based byte offset where the token starts.
    #[inline]
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Returns the 1-based line where the token starts.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns the 1-based column where the token starts.
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Formats as `KIND('value') at POSITION (Lline:Ccolumn)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}('{}') at {} (L{}:C{})",
            self.kind,
            self.value,
            self.position(),
            self.line(),
            self.column()
        )
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 5)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("position", &self.position())?;
        state.serialize_field("line", &self.line())?;
        state.serialize_field("column", &self.column())?;
        state.end()
    }
}
