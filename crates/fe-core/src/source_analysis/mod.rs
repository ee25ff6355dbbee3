// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Lexing and parsing for FE source code.
//!
//! This module contains the token model, the lexer, the escape-sequence
//! processor, and the expression/statement parsers.
//!
//! # Lexical Analysis
//!
//! [`tokenize`] converts source text into an ordered token sequence
//! terminated by exactly one [`TokenKind::Eof`]. Each token carries its
//! exact source lexeme and a [`SourcePosition`].
//!
//! ```
//! use fe_core::source_analysis::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x + 1").unwrap();
//! assert_eq!(tokens.len(), 4); // x, +, 1, eof
//! assert!(matches!(tokens[3].kind(), TokenKind::Eof));
//! ```
//!
//! # Parsing
//!
//! [`parse_expression`] turns a token sequence into a single
//! [`Expression`](crate::ast::Expression); [`parse_statements`] turns one
//! into a statement sequence, delegating to the expression parser for all
//! sub-expressions. [`parse_source`] composes tokenizing and statement
//! parsing.
//!
//! # Error Handling
//!
//! Every failure aborts the call immediately and surfaces the first error
//! as a typed value ([`LexError`], [`EscapeSequenceError`], [`ParseError`])
//! carrying a message and a source position. Malformed input never panics.

pub mod escape;
mod error;
mod lexer;
mod parser;
mod position;
mod token;

#[cfg(test)]
mod lexer_property_tests;

pub use error::{
    EscapeSequenceError, FrontEndError, LexError, LexErrorKind, ParseError, ParseErrorKind,
};
pub use lexer::{tokenize, Lexer};
pub use parser::{
    parse_expression, parse_source, parse_statements, MAX_NESTING_DEPTH, MAX_TOKENS,
};
pub use position::SourcePosition;
pub use token::{Keyword, Token, TokenKind};
