//! CREATE TABLE, ALTER TABLE and DROP TABLE.

use super::error::PResult;
use super::Parser;
use crate::lexer::{Keyword, Special, Token, TokenKind};

impl Parser<'_> {
    /// Parses the body of a CREATE TABLE statement.
    pub(super) fn parse_create_statement(&mut self) -> PResult {
        self.expect_keyword(Keyword::Table, "Expected 'TABLE' after CREATE")?;
        self.parse_identifier("Expected table name after CREATE TABLE")?;
        self.expect_special(Special::LeftParen, "Expected '(' after table name")?;
        self.parse_column_definition_list()?;
        self.expect_special(Special::RightParen, "Expected ')' after column definitions")
    }

    /// Parses the body of an ALTER TABLE statement.
    pub(super) fn parse_alter_statement(&mut self) -> PResult {
        self.expect_keyword(Keyword::Table, "Expected 'TABLE' after ALTER")?;
        self.parse_identifier("Expected table name after ALTER TABLE")?;

        if self.match_keyword(Keyword::Add) {
            if self.match_keyword(Keyword::Column) {
                return self.parse_column_definition();
            }
            if self.check_any_keyword(&[
                Keyword::Constraint,
                Keyword::Primary,
                Keyword::Foreign,
                Keyword::Unique,
            ]) {
                self.skip_to_statement_end();
                return Ok(());
            }
            self.parse_column_definition()
        } else if self.match_keyword(Keyword::Drop) {
            if self.match_keyword(Keyword::Column) {
                return self.parse_identifier("Expected column name after DROP COLUMN");
            }
            if self.check_any_keyword(&[
                Keyword::Constraint,
                Keyword::Primary,
                Keyword::Foreign,
                Keyword::Index,
            ]) {
                self.skip_to_statement_end();
                return Ok(());
            }
            self.parse_identifier("Expected column name after DROP")
        } else {
            Err(self.error(
                "Expected 'ADD' or 'DROP' after table name in ALTER TABLE statement",
            ))
        }
    }

    /// Parses the body of a DROP TABLE statement.
    pub(super) fn parse_drop_statement(&mut self) -> PResult {
        self.expect_keyword(Keyword::Table, "Expected 'TABLE' after DROP")?;
        self.parse_identifier("Expected table name after DROP TABLE")
    }

    /// Parses column definitions and table constraints separated by commas.
    fn parse_column_definition_list(&mut self) -> PResult {
        loop {
            if self.check_any_keyword(&[
                Keyword::Primary,
                Keyword::Foreign,
                Keyword::Unique,
                Keyword::Constraint,
            ]) {
                self.skip_table_constraint();
            } else {
                self.parse_column_definition()?;
            }

            if !self.match_special(Special::Comma) {
                return Ok(());
            }
        }
    }

    /// Parses `name type constraint*`.
    fn parse_column_definition(&mut self) -> PResult {
        self.parse_identifier("Expected column name in column definition")?;
        self.parse_data_type()?;

        while let Some(token) = self.peek() {
            if matches!(
                token.kind,
                TokenKind::Special(Special::Comma | Special::RightParen | Special::Semicolon)
            ) {
                break;
            }
            self.parse_column_constraint()?;
        }
        Ok(())
    }

    /// Parses a type name with an optional `(length)` or
    /// `(precision, scale)`.
    fn parse_data_type(&mut self) -> PResult {
        if !self.check_identifier() {
            return Err(self.error("Expected data type"));
        }
        self.advance();

        if self.match_special(Special::LeftParen) {
            self.expect_number("Expected length/precision in data type specification")?;
            if self.match_special(Special::Comma) {
                self.expect_number("Expected scale after comma in data type specification")?;
            }
            self.expect_special(
                Special::RightParen,
                "Expected ')' after type length/precision",
            )?;
        }
        Ok(())
    }

    /// Parses one column constraint.
    ///
    /// Tokens that start no known constraint (`AUTO_INCREMENT`, `CHECK`,
    /// ...) are skipped one at a time; a parenthesized group is skipped as
    /// a whole.
    fn parse_column_constraint(&mut self) -> PResult {
        match self.peek().and_then(Token::as_keyword) {
            Some(Keyword::Not) => {
                self.advance();
                self.expect_keyword(
                    Keyword::Null,
                    "Expected NULL after NOT in column constraint",
                )
            }
            Some(Keyword::Default) => {
                self.advance();
                self.parse_value("Expected value after DEFAULT in column constraint")
            }
            Some(Keyword::Primary) => {
                self.advance();
                self.match_keyword(Keyword::Key);
                Ok(())
            }
            Some(Keyword::Unique) => {
                self.advance();
                Ok(())
            }
            Some(Keyword::References) => {
                self.advance();
                self.parse_references()
            }
            _ => {
                self.skip_token_or_group();
                Ok(())
            }
        }
    }

    /// Parses the target and actions of a `REFERENCES` clause.
    fn parse_references(&mut self) -> PResult {
        self.parse_identifier("Expected table name after REFERENCES")?;

        if self.match_special(Special::LeftParen) {
            self.parse_identifier("Expected column name in references")?;
            self.expect_special(Special::RightParen, "Expected ')' after referenced column")?;
        }

        while self.match_keyword(Keyword::On) {
            if !(self.match_keyword(Keyword::Delete) || self.match_keyword(Keyword::Update)) {
                return Err(self.error("Expected DELETE or UPDATE after ON in REFERENCES"));
            }

            if self.match_keyword(Keyword::Cascade) || self.match_keyword(Keyword::Restrict) {
                continue;
            }
            if self.match_keyword(Keyword::Set) {
                if !(self.match_keyword(Keyword::Null) || self.match_keyword(Keyword::Default)) {
                    return Err(self.error("Expected NULL or DEFAULT after SET"));
                }
                continue;
            }
            if self.check_word("NO") {
                self.advance();
                if !self.check_word("ACTION") {
                    return Err(self.error("Expected ACTION after NO"));
                }
                self.advance();
                continue;
            }
            return Err(self.error("Expected action after ON DELETE/UPDATE"));
        }
        Ok(())
    }

    /// Skips a table constraint up to the next `,` or `)` outside
    /// parentheses.
    fn skip_table_constraint(&mut self) {
        self.advance();
        while let Some(token) = self.peek() {
            if matches!(
                token.kind,
                TokenKind::Special(Special::Comma | Special::RightParen | Special::Semicolon)
            ) {
                break;
            }
            self.skip_token_or_group();
        }
    }

    /// Skips one token, or a whole balanced `( ... )` group.
    ///
    /// An unbalanced group is skipped up to the end of input.
    fn skip_token_or_group(&mut self) {
        if !self.match_special(Special::LeftParen) {
            self.advance();
            return;
        }

        let mut depth = 1_usize;
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Special(Special::LeftParen) => depth += 1,
                TokenKind::Special(Special::RightParen) => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Skips everything up to the statement terminator.
    fn skip_to_statement_end(&mut self) {
        while !self.is_at_end() && !self.check_special(Special::Semicolon) {
            self.advance();
        }
    }

    /// Checks if the current token is one of the given keywords.
    fn check_any_keyword(&self, keywords: &[Keyword]) -> bool {
        self.peek()
            .and_then(Token::as_keyword)
            .is_some_and(|kw| keywords.contains(&kw))
    }
}
