//! Statement-level syntax checking and cursor primitives.

use tracing::debug;

use super::error::{PResult, Reported};
use crate::diagnostic::{Diagnostic, ValidationResult};
use crate::lexer::{Keyword, Operator, Special, Token, TokenKind};

/// SQL syntax checker.
///
/// Walks a token slice by recursive descent. Every grammar rule returns a
/// [`PResult`]; a rule that fails records exactly one diagnostic and the
/// failure unwinds to [`Parser::parse`].
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given tokens.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Checks the first statement in the token stream.
    ///
    /// Lexical errors take precedence: if any token is an error token, all
    /// of them are reported and the grammar is not checked. Otherwise the
    /// result holds at most one syntax error. Tokens after the first `;`
    /// are never looked at.
    #[must_use]
    pub fn parse(mut self) -> ValidationResult {
        let lexical: Vec<Diagnostic> = self
            .tokens
            .iter()
            .filter_map(|t| {
                t.error_message().map(|message| {
                    Diagnostic::new(message, t.line, t.word).with_offset(t.span.start)
                })
            })
            .collect();
        if !lexical.is_empty() {
            debug!(count = lexical.len(), "lexical errors, skipping grammar check");
            return ValidationResult::from_errors(lexical);
        }

        if self.parse_statement().is_err() {
            debug!(position = self.pos, "syntax error");
        }
        ValidationResult::from_errors(self.errors)
    }

    /// Parses one statement and its terminator.
    fn parse_statement(&mut self) -> PResult {
        let Some(first) = self.peek() else {
            return Err(self.error("Empty SQL statement"));
        };

        match first.as_keyword() {
            Some(Keyword::Select) => {
                self.advance();
                self.parse_select_statement()?;
            }
            Some(Keyword::Insert) => {
                self.advance();
                self.parse_insert_statement()?;
            }
            Some(Keyword::Update) => {
                self.advance();
                self.parse_update_statement()?;
            }
            Some(Keyword::Delete) => {
                self.advance();
                self.parse_delete_statement()?;
            }
            Some(Keyword::Create) => {
                self.advance();
                self.parse_create_statement()?;
            }
            Some(Keyword::Alter) => {
                self.advance();
                self.parse_alter_statement()?;
            }
            Some(Keyword::Drop) => {
                self.advance();
                self.parse_drop_statement()?;
            }
            _ => {
                return Err(self.error(format!(
                    "Unexpected keyword at start of statement: {}",
                    first.value
                )));
            }
        }

        if !self.is_at_end() && !self.match_special(Special::Semicolon) {
            return Err(self.error("Expected ';' at the end of SQL statement"));
        }
        Ok(())
    }

    /// Parses the body of a SELECT statement.
    fn parse_select_statement(&mut self) -> PResult {
        self.parse_column_list()?;

        // A bare column list (`SELECT 1`) needs no FROM clause
        if self.is_at_end() || self.check_special(Special::Semicolon) {
            return Ok(());
        }

        self.expect_keyword(Keyword::From, "Expected 'FROM' after SELECT column list")?;
        self.parse_table_ref()?;

        if self.match_keyword(Keyword::Where) {
            self.parse_condition()?;
        }

        if self.match_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By, "Expected 'BY' after GROUP")?;
            self.parse_column_list()?;

            if self.match_keyword(Keyword::Having) {
                self.parse_condition()?;
            }
        }

        if self.match_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By, "Expected 'BY' after ORDER")?;
            self.parse_order_by_list()?;
        }

        if self.match_keyword(Keyword::Limit) {
            self.expect_number("Expected number after LIMIT")?;

            if self.match_keyword(Keyword::Offset) {
                self.expect_number("Expected number after OFFSET")?;
            } else if self.match_special(Special::Comma) {
                self.expect_number("Expected number after ',' in LIMIT")?;
            }
        }

        Ok(())
    }

    /// Parses the body of an INSERT statement.
    fn parse_insert_statement(&mut self) -> PResult {
        self.expect_keyword(Keyword::Into, "Expected 'INTO' after INSERT")?;
        self.parse_identifier("Expected table name after INSERT INTO")?;

        if self.match_special(Special::LeftParen) {
            self.parse_column_list()?;
            self.expect_special(Special::RightParen, "Expected ')' after column list")?;
        }

        self.expect_keyword(Keyword::Values, "Expected 'VALUES' keyword")?;
        self.parse_values_list()?;
        while self.match_special(Special::Comma) {
            self.parse_values_list()?;
        }

        Ok(())
    }

    /// Parses the body of an UPDATE statement.
    fn parse_update_statement(&mut self) -> PResult {
        self.parse_identifier("Expected table name after UPDATE")?;
        self.expect_keyword(Keyword::Set, "Expected 'SET' after table name")?;
        self.parse_assignment_list()?;

        if self.match_keyword(Keyword::Where) {
            self.parse_condition()?;
        }
        Ok(())
    }

    /// Parses the body of a DELETE statement.
    fn parse_delete_statement(&mut self) -> PResult {
        self.expect_keyword(Keyword::From, "Expected 'FROM' after DELETE")?;
        self.parse_identifier("Expected table name after DELETE FROM")?;

        if self.match_keyword(Keyword::Where) {
            self.parse_condition()?;
        }
        Ok(())
    }

    /// Parses a select list: `*` alone, or aliased expressions.
    fn parse_column_list(&mut self) -> PResult {
        if self.match_star() {
            return Ok(());
        }

        self.parse_expression("Expected column expression")?;
        self.parse_optional_alias()?;

        while self.match_special(Special::Comma) {
            self.parse_expression("Expected column expression after comma")?;
            self.parse_optional_alias()?;
        }
        Ok(())
    }

    /// Parses `AS name` or a bare identifier used as an alias.
    fn parse_optional_alias(&mut self) -> PResult {
        if self.match_keyword(Keyword::As) {
            self.parse_identifier("Expected alias name after AS")?;
        } else if self.check_identifier() {
            self.advance();
        }
        Ok(())
    }

    /// Parses a table reference followed by any number of joins.
    fn parse_table_ref(&mut self) -> PResult {
        self.parse_identifier("Expected table name")?;
        self.parse_optional_alias()?;

        while self.match_join() {
            self.parse_identifier("Expected table name after JOIN")?;
            self.parse_optional_alias()?;
            self.expect_keyword(Keyword::On, "Expected 'ON' after JOIN table")?;
            self.parse_condition()?;
        }
        Ok(())
    }

    /// Consumes `JOIN`, `INNER JOIN`, `LEFT [OUTER] JOIN` or
    /// `RIGHT [OUTER] JOIN`. Rewinds if the sequence is incomplete.
    fn match_join(&mut self) -> bool {
        if self.match_keyword(Keyword::Join) {
            return true;
        }

        let saved = self.pos;
        let matched = match self.peek().and_then(Token::as_keyword) {
            Some(Keyword::Left | Keyword::Right) => {
                self.advance();
                self.match_keyword(Keyword::Outer);
                self.match_keyword(Keyword::Join)
            }
            Some(Keyword::Inner) => {
                self.advance();
                self.match_keyword(Keyword::Join)
            }
            _ => false,
        };

        if !matched {
            self.pos = saved;
        }
        matched
    }

    /// Parses `column (ASC|DESC)?` entries separated by commas.
    fn parse_order_by_list(&mut self) -> PResult {
        self.parse_identifier("Expected column name in ORDER BY")?;
        self.match_sort_direction();

        while self.match_special(Special::Comma) {
            self.parse_identifier("Expected column name after comma in ORDER BY")?;
            self.match_sort_direction();
        }
        Ok(())
    }

    fn match_sort_direction(&mut self) {
        if !self.match_keyword(Keyword::Asc) {
            self.match_keyword(Keyword::Desc);
        }
    }

    /// Parses `column = expression` entries separated by commas.
    fn parse_assignment_list(&mut self) -> PResult {
        self.parse_assignment("Expected column name in assignment")?;
        while self.match_special(Special::Comma) {
            self.parse_assignment("Expected assignment after comma")?;
        }
        Ok(())
    }

    fn parse_assignment(&mut self, missing: &str) -> PResult {
        self.parse_identifier(missing)?;
        self.expect_operator(Operator::Eq, "Expected '=' in assignment")?;
        self.parse_expression("Expected expression in assignment")
    }

    /// Parses a name: an identifier token or any keyword, optionally
    /// qualified with `.name` or `.*`.
    pub(super) fn parse_identifier(&mut self, missing: &str) -> PResult {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Identifier | TokenKind::Keyword(_)) => {
                self.advance();
            }
            _ => return Err(self.error(missing)),
        }
        self.parse_qualifier()
    }

    /// Parses an optional `.name` or `.*` after a name.
    pub(super) fn parse_qualifier(&mut self) -> PResult {
        if !self.match_special(Special::Dot) {
            return Ok(());
        }
        match self.peek() {
            Some(t)
                if t.is_star()
                    || matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword(_)) =>
            {
                self.advance();
                Ok(())
            }
            _ => Err(self.error("Expected identifier or * after '.'")),
        }
    }

    // --- Cursor primitives ---

    /// Returns the current token, if any.
    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token after the current one, if any.
    pub(super) fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Returns the most recently consumed token, if any.
    pub(super) fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Returns true if every token has been consumed.
    pub(super) const fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consumes the current token.
    pub(super) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().and_then(Token::as_keyword) == Some(keyword)
    }

    /// Checks if the current token is the given special character.
    pub(super) fn check_special(&self, special: Special) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Special(special))
    }

    /// Checks if the current token is the given operator.
    pub(super) fn check_operator(&self, op: Operator) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Operator(op))
    }

    /// Checks if the current token is a plain identifier (not a keyword).
    pub(super) fn check_identifier(&self) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Identifier)
    }

    /// Checks if the current token is the identifier `word`, ignoring case.
    ///
    /// Used for words outside the keyword set such as `NO` and `ACTION`.
    pub(super) fn check_word(&self, word: &str) -> bool {
        matches!(
            self.peek(),
            Some(t) if t.kind == TokenKind::Identifier && t.value.eq_ignore_ascii_case(word)
        )
    }

    /// Consumes the given keyword if present.
    pub(super) fn match_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the given special character if present.
    pub(super) fn match_special(&mut self, special: Special) -> bool {
        let matched = self.check_special(special);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes `*` if present.
    pub(super) fn match_star(&mut self) -> bool {
        let matched = self.peek().is_some_and(Token::is_star);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword, message: &str) -> PResult {
        if self.match_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Expects the current token to be the given special character.
    pub(super) fn expect_special(&mut self, special: Special, message: &str) -> PResult {
        if self.match_special(special) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Expects the current token to be the given operator.
    pub(super) fn expect_operator(&mut self, op: Operator, message: &str) -> PResult {
        if self.check_operator(op) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Expects the current token to be a number.
    pub(super) fn expect_number(&mut self, message: &str) -> PResult {
        if matches!(self.peek(), Some(t) if t.kind == TokenKind::Number) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Records a diagnostic at the current token.
    ///
    /// At the end of input the last consumed token is used instead, and
    /// line and word are 0 when there are no tokens at all.
    pub(super) fn error(&mut self, message: impl Into<String>) -> Reported {
        let diagnostic = match self.peek().or_else(|| self.previous()) {
            Some(t) => Diagnostic::new(message, t.line, t.word).with_offset(t.span.start),
            None => Diagnostic::new(message, 0, 0),
        };
        self.errors.push(diagnostic);
        Reported
    }
}

/// Checks the first statement in `tokens`.
///
/// This is a shorthand for `Parser::new(tokens).parse()`.
#[must_use]
pub fn parse(tokens: &[Token]) -> ValidationResult {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn check(sql: &str) -> ValidationResult {
        parse(&tokenize(sql))
    }

    fn messages(sql: &str) -> Vec<String> {
        check(sql).into_errors().into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_simple_select() {
        assert!(check("SELECT id, name FROM users WHERE id = 1;").is_valid());
    }

    #[test]
    fn test_missing_from() {
        let result = check("SELECT id, name WHERE id=1;");
        assert_eq!(result.errors().len(), 1);
        let err = &result.errors()[0];
        assert!(err.message.contains("Expected 'FROM'"));
        assert_eq!((err.line, err.word), (1, 4));
        assert_eq!(err.offset(), Some(16));
    }

    #[test]
    fn test_offset_skips_preceding_special() {
        // `,` and `FROM` share word 3
        let binding = check("SELECT a, FROM t");
        let err = &binding.errors()[0];
        assert_eq!((err.line, err.word), (1, 3));
        assert_eq!(err.offset(), Some(10));
    }

    #[test]
    fn test_empty_statement() {
        let result = check("");
        assert_eq!(result.errors(), [Diagnostic::new("Empty SQL statement", 0, 0)]);
    }

    #[test]
    fn test_comment_only_is_empty() {
        assert_eq!(messages("-- nothing here\n/* or here */"), ["Empty SQL statement"]);
    }

    #[test]
    fn test_lexical_errors_are_all_reported() {
        let result = check("SELECT # FROM @");
        let found: Vec<_> = result
            .errors()
            .iter()
            .map(|d| (d.message.as_str(), d.line, d.word))
            .collect();
        assert_eq!(
            found,
            [
                ("Unexpected character: '#'", 1, 2),
                ("Unexpected character: '@'", 1, 3),
            ]
        );
    }

    #[test]
    fn test_lexical_errors_suppress_syntax_errors() {
        assert_eq!(messages("SELEC 'oops"), ["Unterminated string"]);
    }

    #[test]
    fn test_unknown_statement() {
        let result = check("TRUNCATE users");
        assert_eq!(
            result.errors(),
            [Diagnostic::new(
                "Unexpected keyword at start of statement: TRUNCATE",
                1,
                1
            )
            .with_offset(0)]
        );
    }

    #[test]
    fn test_lowercase_statement_keywords() {
        assert!(check("select * from users where id = 1").is_valid());
    }

    #[test]
    fn test_missing_terminator() {
        assert_eq!(
            messages("SELECT * FROM users extra junk"),
            ["Expected ';' at the end of SQL statement"]
        );
    }

    #[test]
    fn test_error_at_end_uses_last_token() {
        let result = check("SELECT *\nFROM");
        let err = &result.errors()[0];
        assert_eq!(err.message, "Expected table name");
        assert_eq!((err.line, err.word), (2, 1));
        assert_eq!(err.offset(), Some(9));
    }

    #[test]
    fn test_only_first_statement_is_checked() {
        assert!(check("SELECT 1; DROP TABLE users;").is_valid());
        assert!(check("DELETE FROM t; this is not sql at all").is_valid());
    }

    #[test]
    fn test_join_rewinds_incomplete_sequence() {
        assert_eq!(
            messages("SELECT * FROM a LEFT b"),
            ["Expected ';' at the end of SQL statement"]
        );
    }

    #[test]
    fn test_syntax_error_is_single() {
        assert_eq!(
            messages("SELECT a, FROM t WHERE"),
            ["Expected column expression after comma"]
        );
    }

    #[test]
    fn test_parser_is_fresh_per_call() {
        let tokens = tokenize("UPDATE t SET a = 1");
        assert_eq!(parse(&tokens), parse(&tokens));
    }
}
