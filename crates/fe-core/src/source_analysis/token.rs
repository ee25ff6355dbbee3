// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Token types for FE lexical analysis.
//!
//! Each token consists of:
//! - A [`TokenKind`] identifying its category
//! - The exact source `lexeme` it was derived from
//! - A [`SourcePosition`] pointing at its first character
//!
//! Tokens are produced once by the lexer and never mutated. They own their
//! lexeme text ([`EcoString`] makes clones cheap), so a token sequence is
//! independent of the source buffer's lifetime.

use std::sync::LazyLock;

use ecow::EcoString;
use rustc_hash::FxHashMap;

use crate::ast::TypeName;

use super::SourcePosition;

/// The kind of token, not including lexeme or source location.
///
/// This is a closed set: keyword, literal, operator, delimiter, identifier,
/// newline, and end-of-file. Numeric literal kinds carry no parsed value;
/// the parser converts the lexeme, so the token stays a faithful record of
/// the source.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier: `x`, `writeLine`, `合計`.
    Identifier(EcoString),

    /// An integer literal: `42`, `-17`.
    IntegerLiteral,

    /// A real literal: `3.14`, `.5`, `-0.5`.
    RealLiteral,

    /// A string literal. Carries the content with escape sequences already
    /// resolved; the lexeme keeps the raw source text including delimiters.
    StringLiteral(EcoString),

    /// A character literal: `'a'`. Carries the resolved character.
    CharacterLiteral(char),

    /// A boolean literal: `true`, `false`.
    BooleanLiteral(bool),

    /// A keyword from the fixed bilingual keyword table.
    Keyword(Keyword),

    // === Operators ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Equal,
    /// `≠`
    NotEqual,
    /// `>`
    Greater,
    /// `≧`
    GreaterEqual,
    /// `<`
    Less,
    /// `≦`
    LessEqual,
    /// `←`: assignment.
    Assign,

    // === Delimiters ===
    /// `(` or `（`
    LeftParen,
    /// `)` or `）`
    RightParen,
    /// `[` or `［`
    LeftBracket,
    /// `]` or `］`
    RightBracket,
    /// `,` or `，`
    Comma,
    /// `.`
    Dot,
    /// `:` or `：`
    Colon,

    // === Special ===
    /// A line break. Statement parsing uses this as a potential terminator.
    Newline,

    /// End of file. Every token sequence ends with exactly one.
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is a literal value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral
                | Self::RealLiteral
                | Self::StringLiteral(_)
                | Self::CharacterLiteral(_)
                | Self::BooleanLiteral(_)
        )
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if a `-` immediately after this token is the binary
    /// `minus` operator rather than the sign of a numeric literal.
    ///
    /// True exactly for tokens that can end a value: identifiers, literals,
    /// and closing brackets/parens.
    #[must_use]
    pub const fn is_value_producing(&self) -> bool {
        self.is_literal()
            || matches!(
                self,
                Self::Identifier(_) | Self::RightParen | Self::RightBracket
            )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral => write!(f, "<integer>"),
            Self::RealLiteral => write!(f, "<real>"),
            Self::StringLiteral(content) => write!(f, "\"{content}\""),
            Self::CharacterLiteral(c) => write!(f, "'{c}'"),
            Self::BooleanLiteral(b) => write!(f, "{b}"),
            Self::Keyword(keyword) => write!(f, "{}", keyword.as_str()),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Equal => write!(f, "="),
            Self::NotEqual => write!(f, "≠"),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, "≧"),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "≦"),
            Self::Assign => write!(f, "←"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Colon => write!(f, ":"),
            Self::Newline => write!(f, "<newline>"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A keyword from the fixed bilingual table.
///
/// A keyword is only recognized when a complete maximal-munch identifier
/// run matches a table entry exactly; `ifVar`, `if_var`, and `変数if` are
/// all identifiers, never a keyword plus a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `then`
    Then,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `endif`
    Endif,
    /// `while`
    While,
    /// `do`
    Do,
    /// `endwhile`
    Endwhile,
    /// `for`
    For,
    /// `to`
    To,
    /// `step`
    Step,
    /// `in`
    In,
    /// `endfor`
    Endfor,
    /// `function`
    Function,
    /// `endfunction`
    Endfunction,
    /// `procedure`
    Procedure,
    /// `endprocedure`
    Endprocedure,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `定数`: constant declaration marker.
    Constant,
    /// `整数型`: integer type.
    IntegerType,
    /// `実数型`: real type.
    RealType,
    /// `文字列型`: string type.
    StringType,
    /// `文字型`: character type.
    CharacterType,
    /// `論理型`: boolean type.
    BooleanType,
    /// `レコード`: record type.
    RecordType,
    /// `整数型の配列`: array of integers.
    IntegerArrayType,
    /// `実数型の配列`: array of reals.
    RealArrayType,
    /// `文字列型の配列`: array of strings.
    StringArrayType,
    /// `文字型の配列`: array of characters.
    CharacterArrayType,
    /// `論理型の配列`: array of booleans.
    BooleanArrayType,
}

impl Keyword {
    /// Returns the source spelling of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Then => "then",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::Endif => "endif",
            Self::While => "while",
            Self::Do => "do",
            Self::Endwhile => "endwhile",
            Self::For => "for",
            Self::To => "to",
            Self::Step => "step",
            Self::In => "in",
            Self::Endfor => "endfor",
            Self::Function => "function",
            Self::Endfunction => "endfunction",
            Self::Procedure => "procedure",
            Self::Endprocedure => "endprocedure",
            Self::Return => "return",
            Self::Break => "break",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Constant => "定数",
            Self::IntegerType => "整数型",
            Self::RealType => "実数型",
            Self::StringType => "文字列型",
            Self::CharacterType => "文字型",
            Self::BooleanType => "論理型",
            Self::RecordType => "レコード",
            Self::IntegerArrayType => "整数型の配列",
            Self::RealArrayType => "実数型の配列",
            Self::StringArrayType => "文字列型の配列",
            Self::CharacterArrayType => "文字型の配列",
            Self::BooleanArrayType => "論理型の配列",
        }
    }

    /// Returns the [`TypeName`] this keyword declares, if it is a type
    /// keyword.
    #[must_use]
    pub fn type_name(self) -> Option<TypeName> {
        match self {
            Self::IntegerType => Some(TypeName::Integer),
            Self::RealType => Some(TypeName::Real),
            Self::StringType => Some(TypeName::String),
            Self::CharacterType => Some(TypeName::Character),
            Self::BooleanType => Some(TypeName::Boolean),
            Self::RecordType => Some(TypeName::Record),
            Self::IntegerArrayType => Some(TypeName::array_of(TypeName::Integer)),
            Self::RealArrayType => Some(TypeName::array_of(TypeName::Real)),
            Self::StringArrayType => Some(TypeName::array_of(TypeName::String)),
            Self::CharacterArrayType => Some(TypeName::array_of(TypeName::Character)),
            Self::BooleanArrayType => Some(TypeName::array_of(TypeName::Boolean)),
            _ => None,
        }
    }

    /// Returns `true` if this keyword closes or continues an enclosing
    /// block (and therefore terminates a statement body).
    #[must_use]
    pub const fn closes_block(self) -> bool {
        matches!(
            self,
            Self::Elif
                | Self::Else
                | Self::Endif
                | Self::Endwhile
                | Self::Endfor
                | Self::Endfunction
                | Self::Endprocedure
        )
    }
}

/// The fixed keyword table, shared immutably across all lexer calls.
///
/// Initialized once before first use and never mutated, so concurrent
/// tokenization needs no locking.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    for keyword in [
        Keyword::If,
        Keyword::Then,
        Keyword::Elif,
        Keyword::Else,
        Keyword::Endif,
        Keyword::While,
        Keyword::Do,
        Keyword::Endwhile,
        Keyword::For,
        Keyword::To,
        Keyword::Step,
        Keyword::In,
        Keyword::Endfor,
        Keyword::Function,
        Keyword::Endfunction,
        Keyword::Procedure,
        Keyword::Endprocedure,
        Keyword::Return,
        Keyword::Break,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::Constant,
        Keyword::IntegerType,
        Keyword::RealType,
        Keyword::StringType,
        Keyword::CharacterType,
        Keyword::BooleanType,
        Keyword::RecordType,
        Keyword::IntegerArrayType,
        Keyword::RealArrayType,
        Keyword::StringArrayType,
        Keyword::CharacterArrayType,
        Keyword::BooleanArrayType,
    ] {
        table.insert(keyword.as_str(), TokenKind::Keyword(keyword));
    }
    table.insert("true", TokenKind::BooleanLiteral(true));
    table.insert("false", TokenKind::BooleanLiteral(false));
    table
});

/// Looks up a complete identifier run against the keyword table.
///
/// Returns `None` when the run is an ordinary identifier.
#[must_use]
pub(super) fn lookup_keyword(run: &str) -> Option<TokenKind> {
    KEYWORDS.get(run).cloned()
}

/// Iterates over every keyword spelling in the table (used by the
/// boundary-rule tests).
#[cfg(test)]
pub(super) fn keyword_spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.keys().copied()
}

/// A token with its exact source lexeme and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: EcoString,
    position: SourcePosition,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<EcoString>, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the exact source substring this token was derived from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the position of this token's first character.
    #[must_use]
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}
