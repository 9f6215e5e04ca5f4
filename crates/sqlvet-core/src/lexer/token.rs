//! Token types for the SQL lexer.

use super::Span;

/// SQL keywords recognized by the checker.
///
/// Any word outside this set lexes as an identifier, even if it is a
/// keyword in some SQL dialect (`DISTINCT`, `NO`, `ACTION`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Queries
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,
    Offset,
    As,

    // Joins
    Join,
    Left,
    Right,
    Inner,
    Outer,
    On,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Predicates
    And,
    Or,
    Not,
    Null,
    Is,
    In,
    Between,
    Like,

    // Data definition
    Create,
    Table,
    Alter,
    Drop,
    Column,
    Add,
    Index,

    // Constraints
    Primary,
    Key,
    Foreign,
    References,
    Cascade,
    Restrict,
    Default,
    Unique,
    Constraint,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "AS" => Some(Self::As),
            "JOIN" => Some(Self::Join),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "INNER" => Some(Self::Inner),
            "OUTER" => Some(Self::Outer),
            "ON" => Some(Self::On),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "IS" => Some(Self::Is),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "CREATE" => Some(Self::Create),
            "TABLE" => Some(Self::Table),
            "ALTER" => Some(Self::Alter),
            "DROP" => Some(Self::Drop),
            "COLUMN" => Some(Self::Column),
            "ADD" => Some(Self::Add),
            "INDEX" => Some(Self::Index),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "CASCADE" => Some(Self::Cascade),
            "RESTRICT" => Some(Self::Restrict),
            "DEFAULT" => Some(Self::Default),
            "UNIQUE" => Some(Self::Unique),
            "CONSTRAINT" => Some(Self::Constraint),
            _ => None,
        }
    }

    /// Returns the canonical (uppercase) spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::On => "ON",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::Is => "IS",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Create => "CREATE",
            Self::Table => "TABLE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Column => "COLUMN",
            Self::Add => "ADD",
            Self::Index => "INDEX",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Foreign => "FOREIGN",
            Self::References => "REFERENCES",
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
            Self::Default => "DEFAULT",
            Self::Unique => "UNIQUE",
            Self::Constraint => "CONSTRAINT",
        }
    }
}

/// Arithmetic and comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `<>` or `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
}

impl Operator {
    /// Looks up an operator by its exact spelling.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "=" => Some(Self::Eq),
            "<>" | "!=" => Some(Self::NotEq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::LtEq),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::GtEq),
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            "%" => Some(Self::Percent),
            "!" => Some(Self::Bang),
            _ => None,
        }
    }

    /// Returns true if `c` is the first character of some operator.
    #[must_use]
    pub const fn starts_with(c: char) -> bool {
        matches!(
            c,
            '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/' | '%'
        )
    }
}

/// Structural punctuation.
///
/// `*` belongs to the special set too, but the operator rule claims it
/// first, so it always lexes as [`Operator::Star`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
}

impl Special {
    /// Looks up a special character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }

    /// Returns the character as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
        }
    }
}

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A word from the keyword set.
    Keyword(Keyword),
    /// Any other word.
    Identifier,
    /// An integer or decimal literal.
    Number,
    /// A quoted string; the token value holds the decoded content.
    String,
    /// An operator.
    Operator(Operator),
    /// Structural punctuation.
    Special(Special),
    /// A lexical fault.
    Error {
        /// Human-readable description of the fault.
        message: String,
    },
}

/// A token with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The literal text, or the decoded content for strings.
    pub value: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based word number within the line.
    pub word: usize,
    /// Byte range in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        line: usize,
        word: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            word,
            span,
        }
    }

    /// Returns the 0-based byte offset of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns the error message if this is an error token.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Returns true if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error { .. })
    }

    /// Returns true if this token is `*`.
    #[must_use]
    pub const fn is_star(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(Operator::Star))
    }
}
