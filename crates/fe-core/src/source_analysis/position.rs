// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and every error carries a `SourcePosition` so callers can
//! render diagnostics with source context. AST nodes do not carry
//! positions; their equality is purely structural.

/// A position in FE source text.
///
/// `line` and `column` are 1-based (the column counts characters, not
/// bytes); `offset` is the 0-based byte offset into the source string.
///
/// # Examples
///
/// ```
/// use fe_core::source_analysis::SourcePosition;
///
/// let position = SourcePosition::new(2, 5, 12);
/// assert_eq!(position.to_string(), "2:5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number, counted in characters.
    pub column: u32,
    /// 0-based byte offset into the source string.
    pub offset: u32,
}

impl SourcePosition {
    /// Creates a new source position.
    #[must_use]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The position of the first character of any source string.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<SourcePosition> for miette::SourceSpan {
    fn from(position: SourcePosition) -> Self {
        (position.offset as usize, 0).into()
    }
}
