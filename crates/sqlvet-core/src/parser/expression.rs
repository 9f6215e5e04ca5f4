//! Conditions, expressions and literal value lists.
//!
//! The expression grammar only checks that an expression is well formed.
//! There are no precedence levels: a primary takes at most one suffix, and
//! a binary operator's right-hand side is itself a full expression, so
//! `a = b = c` and `1 + 2 * 3` are both accepted as flat chains.

use super::error::PResult;
use super::Parser;
use crate::lexer::{Keyword, Operator, Special, Token, TokenKind};

impl Parser<'_> {
    /// Parses `expression ((AND | OR) expression)*`.
    pub(super) fn parse_condition(&mut self) -> PResult {
        self.parse_logical("Expected expression in condition")
    }

    fn parse_logical(&mut self, missing: &str) -> PResult {
        self.parse_expression(missing)?;

        while self.match_keyword(Keyword::And) || self.match_keyword(Keyword::Or) {
            self.parse_expression("Expected expression after AND/OR")?;
        }
        Ok(())
    }

    /// Parses one expression. `missing` is reported if no expression
    /// starts at the current token.
    pub(super) fn parse_expression(&mut self, missing: &str) -> PResult {
        if self.check_operator(Operator::Minus) || self.check_operator(Operator::Plus) {
            self.advance();
        }
        self.parse_primary(missing)?;
        self.parse_expression_suffix()
    }

    /// Parses a name, function call, literal, `NULL`, `*` or a
    /// parenthesized condition.
    fn parse_primary(&mut self, missing: &str) -> PResult {
        let Some(token) = self.peek() else {
            return Err(self.error(missing));
        };

        match token.kind {
            TokenKind::Identifier => {
                self.advance();
                if self.check_special(Special::LeftParen) {
                    self.parse_function_args()
                } else {
                    self.parse_qualifier()
                }
            }
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Keyword(Keyword::Null)
            | TokenKind::Operator(Operator::Star) => {
                self.advance();
                Ok(())
            }
            TokenKind::Special(Special::LeftParen) => {
                self.advance();
                self.parse_logical("Expected expression after '('")?;
                self.expect_special(Special::RightParen, "Expected ')' after expression")
            }
            _ => Err(self.error(missing)),
        }
    }

    /// Parses `( )`, `( * )` or `( expr, ... )` after a function name.
    fn parse_function_args(&mut self) -> PResult {
        self.advance(); // (

        if self.match_special(Special::RightParen) {
            return Ok(());
        }

        if !self.match_star() {
            self.parse_expression("Expected function argument")?;
            while self.match_special(Special::Comma) {
                self.parse_expression("Expected function argument after comma")?;
            }
        }

        self.expect_special(Special::RightParen, "Expected ')' after function arguments")
    }

    /// Parses at most one operator, `IS`, `IN`, `LIKE` or `BETWEEN` suffix.
    fn parse_expression_suffix(&mut self) -> PResult {
        // NOT IN / NOT LIKE / NOT BETWEEN
        if self.check_keyword(Keyword::Not)
            && matches!(
                self.peek_next().and_then(Token::as_keyword),
                Some(Keyword::In | Keyword::Like | Keyword::Between)
            )
        {
            self.advance();
        }

        let Some(token) = self.peek() else {
            return Ok(());
        };

        match token.kind {
            TokenKind::Keyword(Keyword::Is) => {
                self.advance();
                if self.match_keyword(Keyword::Not) {
                    self.expect_keyword(Keyword::Null, "Expected NULL after IS NOT")
                } else {
                    self.expect_keyword(Keyword::Null, "Expected NULL after IS")
                }
            }
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                if !self.check_special(Special::LeftParen) {
                    return Err(self.error("Expected '(' after IN"));
                }
                // IN ((1, 2)) wraps the values list in its own parentheses
                let nested = matches!(
                    self.peek_next().map(|t| &t.kind),
                    Some(TokenKind::Special(Special::LeftParen))
                );
                if !nested {
                    return self.parse_values_list();
                }
                self.advance();
                self.parse_values_list()?;
                self.expect_special(Special::RightParen, "Expected ')' after IN list")
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.advance();
                self.parse_expression("Expected lower bound expression after BETWEEN")?;
                self.expect_keyword(Keyword::And, "Expected AND after BETWEEN lower bound")?;
                self.parse_expression("Expected upper bound expression after AND")
            }
            TokenKind::Keyword(Keyword::Like) | TokenKind::Operator(_) => {
                self.advance();
                self.parse_expression("Expected right hand expression after operator")
            }
            _ => Ok(()),
        }
    }

    /// Parses `( value (, value)* )`.
    pub(super) fn parse_values_list(&mut self) -> PResult {
        self.expect_special(Special::LeftParen, "Expected '(' for values list")?;
        self.parse_value("Expected value in values list")?;

        while self.match_special(Special::Comma) {
            self.parse_value("Expected value after comma in values list")?;
        }

        self.expect_special(Special::RightParen, "Expected ')' after values list")
    }

    /// Parses a string, a signed or unsigned number, `NULL` or `DEFAULT`.
    pub(super) fn parse_value(&mut self, missing: &str) -> PResult {
        let signed = self.check_operator(Operator::Minus) || self.check_operator(Operator::Plus);
        if signed {
            self.advance();
            return self.expect_number(missing);
        }

        match self.peek().map(|t| &t.kind) {
            Some(
                TokenKind::String
                | TokenKind::Number
                | TokenKind::Keyword(Keyword::Null | Keyword::Default),
            ) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn check_where(condition: &str) -> Vec<String> {
        let sql = format!("SELECT * FROM t WHERE {condition}");
        parse(&tokenize(&sql))
            .into_errors()
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_comparisons() {
        for condition in [
            "a = 1",
            "a <> 'x'",
            "a != b",
            "a >= 1.5",
            "t.a < t.b",
            "a = b = c",
            "a + 1 * 2 = 7",
            "(a = 1)",
            "(a = 1 OR b = 2) AND c = 3",
            "((a))",
        ] {
            assert!(check_where(condition).is_empty(), "{condition}");
        }
    }

    #[test]
    fn test_predicates() {
        for condition in [
            "a IS NULL",
            "a IS NOT NULL",
            "a IN (1, 2, 3)",
            "a NOT IN ('x', NULL)",
            "a LIKE 'abc%'",
            "a NOT LIKE 'abc%'",
            "a BETWEEN 1 AND 10",
            "a NOT BETWEEN 1 AND 10 OR b = 2",
        ] {
            assert!(check_where(condition).is_empty(), "{condition}");
        }
    }

    #[test]
    fn test_function_calls_and_signs() {
        for condition in [
            "COUNT(*) > 1",
            "lower(name) = 'bob'",
            "now() > created_at",
            "coalesce(a, b, 0) = -1",
            "-a < +b",
        ] {
            assert!(check_where(condition).is_empty(), "{condition}");
        }
    }

    #[test]
    fn test_is_requires_null() {
        assert_eq!(check_where("a IS 1"), ["Expected NULL after IS"]);
        assert_eq!(check_where("a IS NOT 1"), ["Expected NULL after IS NOT"]);
    }

    #[test]
    fn test_in_requires_list() {
        assert_eq!(check_where("a IN 1"), ["Expected '(' after IN"]);
        assert_eq!(check_where("a IN (b)"), ["Expected value in values list"]);
        assert_eq!(check_where("a IN (1, 2"), ["Expected ')' after values list"]);
    }

    #[test]
    fn test_in_accepts_nested_list() {
        assert!(check_where("a IN ((1, 2))").is_empty());
        assert!(check_where("a NOT IN (('x'))").is_empty());
        assert!(check_where("a IN (1, 2) AND b IN ((3))").is_empty());
        assert_eq!(check_where("a IN ((1, 2)"), ["Expected ')' after IN list"]);
        assert_eq!(check_where("a IN (()"), ["Expected value in values list"]);
    }

    #[test]
    fn test_between_requires_and() {
        assert_eq!(
            check_where("a BETWEEN 1 OR 2"),
            ["Expected AND after BETWEEN lower bound"]
        );
        assert_eq!(
            check_where("a BETWEEN 1 AND"),
            ["Expected upper bound expression after AND"]
        );
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(
            check_where("a ="),
            ["Expected right hand expression after operator"]
        );
        assert_eq!(check_where("a = 1 AND"), ["Expected expression after AND/OR"]);
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(check_where("(a = 1"), ["Expected ')' after expression"]);
        assert_eq!(check_where("()"), ["Expected expression after '('"]);
        assert_eq!(
            check_where("f(a, b"),
            ["Expected ')' after function arguments"]
        );
    }

    #[test]
    fn test_missing_condition() {
        assert_eq!(check_where(""), ["Expected expression in condition"]);
    }
}
