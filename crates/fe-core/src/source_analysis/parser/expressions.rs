// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing.
//!
//! One method per precedence level, lowest binding first:
//!
//! 1. `or`
//! 2. `and`
//! 3. comparisons (`=` `≠` `>` `≧` `<` `≦`), which do not chain
//! 4. `+` `-`
//! 5. `*` `/` `%`
//! 6. prefix `not` `+` `-`
//! 7. postfix `[index]`, `.field`, `(arguments)`
//! 8. primaries: literals, identifiers, parenthesized expressions
//!
//! All binary operators at the same level associate to the left, except the
//! comparison level: a second comparison operator after a completed
//! comparison is a syntax error, not a parse of `(a < b) < c`.

use crate::ast::{BinaryOperator, Expression, Literal, UnaryOperator};

use super::{Keyword, ParseError, Parser, TokenKind};
use crate::source_analysis::ParseErrorKind;

impl Parser {
    /// Parses one expression at the lowest precedence level.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        // Deep expressions recurse once per level; grow the stack rather
        // than overflow it, and cap the depth with the nesting limit.
        stacker::maybe_grow(32 * 1024, 256 * 1024, || {
            self.enter_nesting()?;
            let result = self.parse_or();
            self.exit_nesting();
            result
        })
    }

    fn parse_or(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.parse_and()?;
        while self.match_keyword(Keyword::Or) {
            let right = self.parse_and()?;
            expression = Expression::binary(BinaryOperator::Or, expression, right);
        }
        Ok(expression)
    }

    fn parse_and(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.parse_comparison()?;
        while self.match_keyword(Keyword::And) {
            let right = self.parse_comparison()?;
            expression = Expression::binary(BinaryOperator::And, expression, right);
        }
        Ok(expression)
    }

    /// Parses at most one comparison. `a < b < c` is rejected here rather
    /// than parsed as `(a < b) < c`.
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_additive()?;
        let Some(operator) = self.comparison_operator() else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_additive()?;
        if self.comparison_operator().is_some() {
            return Err(ParseError::unexpected_token(
                "comparisons cannot be chained; join them with 'and'",
                self.current_position(),
            ));
        }
        Ok(Expression::binary(operator, left, right))
    }

    fn comparison_operator(&self) -> Option<BinaryOperator> {
        match self.current_kind() {
            TokenKind::Equal => Some(BinaryOperator::Equal),
            TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
            _ => None,
        }
    }

    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.parse_multiplicative()?;
        loop {
            let operator = match self.current_kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            expression = Expression::binary(operator, expression, right);
        }
        Ok(expression)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.parse_unary()?;
        loop {
            let operator = match self.current_kind() {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                TokenKind::Percent => BinaryOperator::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            expression = Expression::binary(operator, expression, right);
        }
        Ok(expression)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let operator = match self.current_kind() {
            TokenKind::Keyword(Keyword::Not) => Some(UnaryOperator::Not),
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Minus => Some(UnaryOperator::Minus),
            _ => None,
        };
        let Some(operator) = operator else {
            return self.parse_postfix();
        };

        self.advance();
        self.enter_nesting()?;
        let operand = self.parse_unary()?;
        self.exit_nesting();
        Ok(Expression::unary(operator, operand))
    }

    /// Parses a primary followed by any number of postfix operations.
    /// `a[i].name(x)` nests left to right; a call is only valid directly on
    /// an identifier.
    fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::LeftBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(&TokenKind::RightBracket, "']' after the array index")?;
                    expression = Expression::array_access(expression, index);
                }
                TokenKind::Dot => {
                    self.advance();
                    let field = self.expect_identifier("a field name after '.'")?;
                    expression = Expression::field_access(expression, field);
                }
                TokenKind::LeftParen => {
                    let Expression::Identifier(name) = expression else {
                        return Err(ParseError::unexpected_token(
                            "function calls require a function name",
                            self.current_position(),
                        ));
                    };
                    self.advance();
                    let arguments = self.parse_arguments()?;
                    expression = Expression::call(name, arguments);
                }
                _ => break,
            }
        }
        Ok(expression)
    }

    /// Parses a comma-separated argument list up to and including the
    /// closing parenthesis. The opening parenthesis is already consumed.
    fn parse_arguments(&mut self) -> Result<Vec<Expression>, ParseError> {
        let mut arguments = Vec::new();
        if self.match_token(&TokenKind::RightParen) {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_expression()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        if !self.match_token(&TokenKind::RightParen) {
            return Err(ParseError::mismatched_paren(self.current_position()));
        }
        Ok(arguments)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let position = self.current_position();
        match self.current_kind().clone() {
            TokenKind::IntegerLiteral => {
                let token = self.advance();
                let value = token.lexeme().parse::<i64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidLiteral(token.lexeme().into()),
                        position,
                    )
                })?;
                Ok(Expression::Literal(Literal::Integer(value)))
            }
            TokenKind::RealLiteral => {
                let token = self.advance();
                let value = token.lexeme().parse::<f64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidLiteral(token.lexeme().into()),
                        position,
                    )
                })?;
                Ok(Expression::Literal(Literal::Real(value)))
            }
            TokenKind::StringLiteral(content) => {
                self.advance();
                Ok(Expression::Literal(Literal::String(content)))
            }
            TokenKind::CharacterLiteral(c) => {
                self.advance();
                Ok(Expression::Literal(Literal::Character(c)))
            }
            TokenKind::BooleanLiteral(b) => {
                self.advance();
                Ok(Expression::Literal(Literal::Boolean(b)))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expression::identifier(name))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.parse_expression()?;
                if !self.match_token(&TokenKind::RightParen) {
                    return Err(ParseError::mismatched_paren(self.current_position()));
                }
                Ok(expression)
            }
            TokenKind::RightParen => Err(ParseError::mismatched_paren(position)),
            TokenKind::Eof => Err(ParseError::unexpected_eof(position)),
            TokenKind::Newline => Err(ParseError::unexpected_token(
                "expected an expression, found end of line",
                position,
            )),
            _ => Err(self.unexpected("an expression")),
        }
    }
}
