// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! FE language front end.
//!
//! This crate turns FE source text into a typed, structurally immutable
//! abstract syntax tree. FE is a small, Unicode-aware pseudocode language
//! mixing Latin control keywords with Japanese type keywords and the
//! comparison symbols `≠`, `≧`, and `≦`. The pipeline has three stages:
//!
//! - Lexical analysis (tokenization, including escape-sequence processing)
//! - Expression parsing (precedence climbing over a fixed operator grammar)
//! - Statement parsing (control flow, declarations, blocks)
//!
//! The pipeline is a pure function from an in-memory source string to an
//! AST or a typed error. There is no I/O, no shared mutable state, and no
//! error recovery: the first malformed construct aborts the call with a
//! value the caller can render.
//!
//! # Example
//!
//! ```
//! use fe_core::source_analysis::parse_source;
//!
//! let program = parse_source("if x > 0 then\n    writeLine(x)\nendif").unwrap();
//! assert_eq!(program.len(), 1);
//! ```

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Literal, Statement};
    pub use crate::source_analysis::{
        parse_expression, parse_source, parse_statements, tokenize, SourcePosition, Token,
        TokenKind,
    };
}
