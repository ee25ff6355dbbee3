// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parsing for FE token sequences.
//!
//! [`parse_expression`] parses a complete token sequence as a single
//! expression; [`parse_statements`] parses one as a statement sequence and
//! delegates to the expression parser for every sub-expression.
//! [`parse_source`] composes [`tokenize`](super::tokenize) with statement
//! parsing.
//!
//! Parsing is fail-fast: the first syntax error aborts the call and is
//! returned as a [`ParseError`] value. There is no recovery and no error
//! aggregation, so the reported position always refers to the first
//! offending token.
//!
//! Two limits keep adversarial input from exhausting resources, and both
//! surface as ordinary errors rather than panics: a sequence longer than
//! [`MAX_TOKENS`] is rejected up front, and expression or block nesting
//! deeper than [`MAX_NESTING_DEPTH`] is rejected where the limit is hit.

mod expressions;
mod statements;


use std::mem;

use ecow::EcoString;

use crate::ast::{Expression, Statement, TypeName};

use super::{
    tokenize, FrontEndError, Keyword, ParseError, SourcePosition, Token, TokenKind,
};

/// Maximum number of tokens a single parse call accepts.
pub const MAX_TOKENS: usize = 100_000;

/// Maximum expression and block nesting depth.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses FE source text into a statement sequence.
///
/// # Errors
///
/// Returns the first lexical or syntax error encountered.
///
/// # Examples
///
/// ```
/// use fe_core::source_analysis::parse_source;
///
/// let program = parse_source("x ← 1 + 2").unwrap();
/// assert_eq!(program.len(), 1);
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, FrontEndError> {
    let tokens = tokenize(source)?;
    let statements = parse_statements(tokens)?;
    Ok(statements)
}

/// Parses a token sequence into a statement sequence.
///
/// # Errors
///
/// Returns the first syntax error encountered.
pub fn parse_statements(tokens: Vec<Token>) -> Result<Vec<Statement>, ParseError> {
    check_token_limit(&tokens)?;
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_program()?;
    tracing::trace!(count = statements.len(), "parsed statements");
    Ok(statements)
}

/// Parses a token sequence as a single complete expression.
///
/// The sequence must contain exactly one expression; anything left over
/// besides trailing newlines and the end-of-file marker is an error.
///
/// # Errors
///
/// Returns the first syntax error encountered.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    check_token_limit(&tokens)?;
    let mut parser = Parser::new(tokens);
    parser.skip_newlines();
    let expression = parser.parse_expression()?;
    parser.skip_newlines();
    if !parser.is_at_end() {
        return Err(ParseError::unexpected_token(
            format!(
                "expected end of input after the expression, found '{}'",
                parser.current_token().lexeme()
            ),
            parser.current_position(),
        ));
    }
    Ok(expression)
}

fn check_token_limit(tokens: &[Token]) -> Result<(), ParseError> {
    if tokens.len() > MAX_TOKENS {
        let position = tokens.first().map_or(SourcePosition::start(), Token::position);
        return Err(ParseError::token_limit(tokens.len(), position));
    }
    Ok(())
}

/// Parser state: the token sequence, a cursor, and the current nesting
/// depth. A parser is consumed by a single parse call.
pub(super) struct Parser {
    tokens: Vec<Token>,
    current: usize,
    nesting_depth: usize,
}

impl Parser {
    /// Creates a parser over `tokens`. A missing end-of-file marker is
    /// supplied so the cursor always has a token to point at.
    fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.kind().is_eof()) {
            let position = tokens
                .last()
                .map_or(SourcePosition::start(), Token::position);
            tokens.push(Token::new(TokenKind::Eof, "", position));
        }
        Self {
            tokens,
            current: 0,
            nesting_depth: 0,
        }
    }

    fn current_token(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    fn current_kind(&self) -> &TokenKind {
        self.current_token().kind()
    }

    fn current_position(&self) -> SourcePosition {
        self.current_token().position()
    }

    fn is_at_end(&self) -> bool {
        self.current_kind().is_eof()
    }

    /// Consumes and returns the current token. The end-of-file marker is
    /// never consumed, so the cursor cannot run off the sequence.
    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !token.kind().is_eof() {
            self.current += 1;
        }
        token
    }

    /// Returns `true` if the current token has the same kind as `kind`,
    /// ignoring any payload.
    fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    /// Consumes the current token if it matches `kind`.
    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it matches `kind`, or fails with a
    /// message naming what was `expected`.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.unexpected(expected))
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.current_kind(), TokenKind::Keyword(k) if *k == keyword)
    }

    fn match_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword, expected: &str) -> Result<(), ParseError> {
        if self.match_keyword(keyword) {
            return Ok(());
        }
        Err(self.unexpected(expected))
    }

    /// Consumes an identifier and returns its name.
    fn expect_identifier(&mut self, expected: &str) -> Result<EcoString, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            return Ok(name);
        }
        Err(self.unexpected(expected))
    }

    /// Consumes a type keyword and returns the type it names.
    fn expect_type_keyword(&mut self, expected: &str) -> Result<TypeName, ParseError> {
        if let TokenKind::Keyword(keyword) = self.current_kind() {
            if let Some(type_name) = keyword.type_name() {
                self.advance();
                return Ok(type_name);
            }
        }
        Err(self.unexpected(expected))
    }

    /// Builds the error for a token that does not fit the grammar here.
    fn unexpected(&self, expected: &str) -> ParseError {
        if self.is_at_end() {
            return ParseError::unexpected_eof(self.current_position());
        }
        ParseError::unexpected_token(
            format!(
                "expected {expected}, found '{}'",
                self.current_token().lexeme()
            ),
            self.current_position(),
        )
    }

    fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Returns `true` at a token that can terminate a statement: a line
    /// break, end of input, or a keyword that closes the enclosing block.
    fn at_statement_end(&self) -> bool {
        match self.current_kind() {
            TokenKind::Newline | TokenKind::Eof => true,
            TokenKind::Keyword(keyword) => keyword.closes_block(),
            _ => false,
        }
    }

    /// Consumes a statement terminator. Block-closing keywords are left in
    /// place for the enclosing construct to consume.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        if !self.at_statement_end() {
            return Err(self.unexpected("end of statement"));
        }
        if self.check(&TokenKind::Newline) {
            self.advance();
        }
        Ok(())
    }

    /// Enters one nesting level, failing once the depth limit is reached.
    /// Depth is not unwound on error paths; a failed parse discards the
    /// whole parser.
    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::nesting_too_deep(self.current_position()));
        }
        self.nesting_depth += 1;
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.nesting_depth -= 1;
    }
}
