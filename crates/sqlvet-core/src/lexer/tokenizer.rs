//! SQL Tokenizer implementation.

use super::{Keyword, Operator, Span, Special, Token, TokenKind};

/// A lexer that tokenizes SQL input.
///
/// Besides the token stream, the lexer tracks the 1-based line and the
/// 1-based word number within that line. Only keywords, identifiers,
/// numbers, strings (closed or not) and operators count as words.
/// Punctuation, stray characters and unclosed block comments take the
/// number of the word that follows them.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Current line number.
    line: usize,
    /// Current word number within the line.
    word: usize,
    /// Byte offset at which each line starts; index 0 is line 1.
    line_starts: Vec<usize>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            word: 1,
            line_starts: vec![0],
        }
    }

    /// Returns the byte offset at which `line` (1-based) starts.
    ///
    /// Only lines the lexer has already reached are known.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index).copied())
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Records that a newline was just consumed.
    fn start_line(&mut self) {
        self.line += 1;
        self.word = 1;
        self.line_starts.push(self.pos);
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an error token if a block comment runs off the end of the
    /// input.
    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            while let Some(c) = self.peek().filter(|&c| is_whitespace(c)) {
                self.advance();
                if c == '\n' {
                    self.start_line();
                }
            }

            match (self.peek(), self.peek_next()) {
                (Some('-'), Some('-')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => {
                    if let Some(error) = self.skip_block_comment() {
                        return Some(error);
                    }
                }
                _ => return None,
            }
        }
    }

    /// Skips a `--` comment, leaving the newline in place.
    fn skip_line_comment(&mut self) {
        self.advance(); // -
        self.advance(); // -
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips a `/* ... */` comment.
    fn skip_block_comment(&mut self) -> Option<Token> {
        let (start, line, word) = (self.pos, self.line, self.word);
        self.advance(); // /
        self.advance(); // *

        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return None;
                }
                Some('\n') => self.start_line(),
                Some(_) => {}
                None => {
                    return Some(Token::new(
                        TokenKind::Error {
                            message: String::from("Unterminated block comment"),
                        },
                        "/*",
                        line,
                        word,
                        Span::new(start, self.pos),
                    ));
                }
            }
        }
    }

    /// Creates a span from start to current position.
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span and position.
    fn make_token(&self, kind: TokenKind, value: impl Into<String>) -> Token {
        Token::new(kind, value, self.line, self.word, self.make_span())
    }

    /// Creates a token that counts as a word.
    fn make_word(&mut self, kind: TokenKind, value: impl Into<String>) -> Token {
        let token = self.make_token(kind, value);
        self.word += 1;
        token
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        let kind = Keyword::from_str(text).map_or(TokenKind::Identifier, TokenKind::Keyword);
        self.make_word(kind, text)
    }

    /// Scans a number.
    ///
    /// At most one decimal point is taken; a second one ends the token.
    fn scan_number(&mut self) -> Token {
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[self.start..self.pos];
        self.make_word(TokenKind::Number, text)
    }

    /// Scans a string literal. The opening quote is already consumed.
    fn scan_string(&mut self, quote: char) -> Token {
        let mut value = String::new();

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    // Doubled quote is an escaped quote
                    if self.peek_next() == Some(quote) {
                        value.push(quote);
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        return self.make_word(TokenKind::String, value);
                    }
                }
                None | Some('\n') => {
                    return self.make_word(
                        TokenKind::Error {
                            message: String::from("Unterminated string"),
                        },
                        value,
                    );
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scans an operator, preferring the two-character form.
    fn scan_operator(&mut self, first: char) -> Token {
        if let Some(second) = self.peek() {
            let pair = &self.input[self.start..self.pos + second.len_utf8()];
            if let Some(op) = Operator::from_str(pair) {
                self.advance();
                return self.make_word(TokenKind::Operator(op), pair);
            }
        }

        let text = &self.input[self.start..self.pos];
        match Operator::from_str(text) {
            Some(op) => self.make_word(TokenKind::Operator(op), text),
            None => self.unexpected(first),
        }
    }

    fn unexpected(&self, c: char) -> Token {
        self.make_token(
            TokenKind::Error {
                message: format!("Unexpected character: '{c}'"),
            },
            c,
        )
    }

    /// Scans the next token, or returns `None` at the end of input.
    #[must_use]
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(error) = self.skip_whitespace_and_comments() {
            return Some(error);
        }
        self.start = self.pos;

        let c = self.advance()?;
        let token = match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            '\'' | '"' => self.scan_string(c),
            c if Operator::starts_with(c) => self.scan_operator(c),
            c => match Special::from_char(c) {
                Some(special) => self.make_token(TokenKind::Special(special), special.as_str()),
                None => self.unexpected(c),
            },
        };
        Some(token)
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
