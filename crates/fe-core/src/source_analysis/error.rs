// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the FE front end.
//!
//! All errors are values carrying a message and, where meaningful, a
//! source position. They integrate with [`miette`] for rendering with
//! source context. The pipeline surfaces the first error it encounters and
//! never aggregates; every error is recoverable by the caller.

use ecow::EcoString;
use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use super::SourcePosition;

/// A lexical error encountered during tokenization.
///
/// Tokenization aborts at the first lexical error; there is no error
/// recovery inside the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub position: SourcePosition,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, position: SourcePosition) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), position)
    }

    /// Creates an "unterminated string" error.
    #[must_use]
    pub fn unterminated_string(position: SourcePosition) -> Self {
        Self::new(LexErrorKind::UnterminatedString, position)
    }

    /// Creates an "unterminated comment" error.
    #[must_use]
    pub fn unterminated_comment(position: SourcePosition) -> Self {
        Self::new(LexErrorKind::UnterminatedComment, position)
    }

    /// Wraps a malformed escape sequence found inside a literal body.
    #[must_use]
    pub fn invalid_escape(error: EscapeSequenceError, position: SourcePosition) -> Self {
        Self::new(LexErrorKind::InvalidEscape(error), position)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A code point outside the identifier/operator/delimiter sets.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A string or character literal was not terminated before
    /// end-of-input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `/* … */` comment was not terminated before end-of-input.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A malformed escape sequence inside a literal body.
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(EscapeSequenceError),
}

/// A malformed escape sequence inside a string or character literal body.
///
/// `offset` is the byte offset of the backslash that introduced the
/// sequence. It is relative to the content when produced by
/// [`escape::process`](super::escape::process) directly, and absolute in
/// the source when surfaced through a [`LexError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EscapeSequenceError {
    /// A human-readable description of the malformed sequence.
    pub message: EcoString,
    /// Byte offset of the introducing backslash.
    pub offset: usize,
}

impl Diagnostic for EscapeSequenceError {
    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::at_offset(
            self.offset,
            "here",
        ))))
    }
}

impl EscapeSequenceError {
    /// Creates a new escape-sequence error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// Shifts the offset by `base` bytes (used by the lexer to turn a
    /// content-relative offset into a source-absolute one).
    #[must_use]
    pub fn offset_by(mut self, base: usize) -> Self {
        self.offset += base;
        self
    }
}

/// A syntax error encountered while parsing expressions or statements.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of parsing error.
    #[source]
    pub kind: ParseErrorKind,
    /// The position of the offending token.
    #[label("here")]
    pub position: SourcePosition,
}

impl ParseError {
    /// Creates a new parsing error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfInput, position)
    }

    /// Creates an "unexpected token" error with a descriptive message.
    #[must_use]
    pub fn unexpected_token(message: impl Into<EcoString>, position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken(message.into()), position)
    }

    /// Creates a "mismatched parenthesis" error.
    #[must_use]
    pub fn mismatched_paren(position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::MismatchedParenthesis, position)
    }

    /// Creates a "malformed statement" error with a descriptive message.
    #[must_use]
    pub fn malformed(message: impl Into<EcoString>, position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::MalformedStatement(message.into()), position)
    }

    /// Creates a "token limit exceeded" error.
    #[must_use]
    pub fn token_limit(count: usize, position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::TokenLimitExceeded(count), position)
    }

    /// Creates a "nesting too deep" error.
    #[must_use]
    pub fn nesting_too_deep(position: SourcePosition) -> Self {
        Self::new(ParseErrorKind::NestingTooDeep, position)
    }
}

/// The kind of parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The token sequence ended where a construct was incomplete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A token that does not fit the grammar at this point.
    #[error("{0}")]
    UnexpectedToken(EcoString),

    /// An unmatched open or close parenthesis.
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    /// A declaration or control-flow construct with a broken shape.
    #[error("{0}")]
    MalformedStatement(EcoString),

    /// A numeric literal whose lexeme does not fit the literal type.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(EcoString),

    /// The input exceeded the per-call token ceiling.
    #[error("input of {0} tokens exceeds the parser limit")]
    TokenLimitExceeded(usize),

    /// Statement/expression nesting exceeded the recursion ceiling.
    #[error("nesting is too deep")]
    NestingTooDeep,
}

/// Any error the composed front end can produce.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum FrontEndError {
    /// Tokenization failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    /// Parsing failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}
