// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! The FE lexer.
//!
//! Converts source text into a [`Token`] sequence terminated by exactly one
//! [`TokenKind::Eof`]. The lexer walks the source once, character by
//! character, tracking line, column, and byte offset as it goes. Spaces,
//! tabs, carriage returns, and comments are skipped; line breaks become
//! [`TokenKind::Newline`] tokens because statement parsing treats them as
//! potential terminators.
//!
//! Keywords are recognized by the boundary rule: the lexer first takes the
//! longest run of identifier characters, then checks the complete run
//! against the keyword table. A run that merely starts with a keyword
//! (`ifVar`, `整数型x`) is an ordinary identifier.

use std::iter::Peekable;
use std::str::CharIndices;

use super::escape;
use super::token::lookup_keyword;
use super::{LexError, SourcePosition, Token, TokenKind};

/// Tokenizes FE source text.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no tokens are produced for
/// input that fails to tokenize.
///
/// # Examples
///
/// ```
/// use fe_core::source_analysis::{tokenize, TokenKind};
///
/// let tokens = tokenize("x ← 42").unwrap();
/// assert!(matches!(tokens[1].kind(), TokenKind::Assign));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// A single-pass lexer over FE source text.
pub struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Consumes the lexer and produces the full token sequence.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let position = self.current_position();
            let Some(c) = self.peek_char() else {
                tokens.push(Token::new(TokenKind::Eof, "", position));
                break;
            };

            let token = match c {
                '\n' => {
                    self.advance();
                    Token::new(TokenKind::Newline, "\n", position)
                }
                c if c.is_ascii_digit() => self.lex_number(position),
                '.' if self.nth_is_digit(1) => self.lex_number(position),
                '-' if self.fuses_into_number(&tokens) => self.lex_number(position),
                c if is_identifier_start(c) => self.lex_identifier(position),
                '"' | '\'' => self.lex_quoted(position)?,
                _ => self.lex_operator(position)?,
            };
            tokens.push(token);
        }

        tracing::trace!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Skips spaces, tabs, carriage returns, and comments. Line comments
    /// stop before the newline so it still becomes a token; block comments
    /// may span lines.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('/') if self.nth_char(1) == Some('/') => {
                    while self.peek_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.nth_char(1) == Some('*') => {
                    let start = self.current_position();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            None => return Err(LexError::unterminated_comment(start)),
                            Some('*') if self.peek_char() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Lexes an identifier run, then classifies the complete run against
    /// the keyword table.
    fn lex_identifier(&mut self, position: SourcePosition) -> Token {
        let start = position.offset as usize;
        self.advance_while(is_identifier_continue);
        let run = &self.source[start..self.current_offset()];
        let kind = lookup_keyword(run).unwrap_or_else(|| TokenKind::Identifier(run.into()));
        Token::new(kind, run, position)
    }

    /// Lexes an integer or real literal, including a fused leading sign
    /// when the caller decided the `-` belongs to the number.
    fn lex_number(&mut self, position: SourcePosition) -> Token {
        let start = position.offset as usize;
        if self.peek_char() == Some('-') {
            self.advance();
        }
        self.advance_while(|c| c.is_ascii_digit());

        // A dot only joins the literal when a digit follows; `12.` is an
        // integer and a dot token.
        let mut is_real = false;
        if self.peek_char() == Some('.') && self.nth_is_digit(1) {
            is_real = true;
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        let lexeme = &self.source[start..self.current_offset()];
        let kind = if is_real {
            TokenKind::RealLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::new(kind, lexeme, position)
    }

    /// Lexes a `"…"` or `'…'` literal. The raw content between the
    /// delimiters goes through the escape processor; `'` literals whose
    /// processed content is a single character become character literals,
    /// everything else is a string.
    fn lex_quoted(&mut self, position: SourcePosition) -> Result<Token, LexError> {
        let start = position.offset as usize;
        let delimiter = match self.advance() {
            Some(d) => d,
            None => return Err(LexError::unterminated_string(position)),
        };
        let content_start = self.current_offset();

        loop {
            match self.peek_char() {
                None => return Err(LexError::unterminated_string(position)),
                Some(c) if c == delimiter => break,
                Some('\\') => {
                    // Keep the escape raw here; a backslash never ends the
                    // literal, even before a delimiter character.
                    self.advance();
                    if self.advance().is_none() {
                        return Err(LexError::unterminated_string(position));
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let content_end = self.current_offset();
        self.advance();

        let content = &self.source[content_start..content_end];
        let processed = escape::process(content)
            .map_err(|e| LexError::invalid_escape(e.offset_by(content_start), position))?;

        let mut processed_chars = processed.chars();
        let kind = match (delimiter, processed_chars.next(), processed_chars.next()) {
            ('\'', Some(c), None) => TokenKind::CharacterLiteral(c),
            _ => TokenKind::StringLiteral(processed.into()),
        };
        let lexeme = &self.source[start..self.current_offset()];
        Ok(Token::new(kind, lexeme, position))
    }

    /// Lexes a single-character operator or delimiter. Full-width
    /// delimiters map to the same kinds as their ASCII counterparts; the
    /// lexeme keeps the original character.
    fn lex_operator(&mut self, position: SourcePosition) -> Result<Token, LexError> {
        let start = position.offset as usize;
        let c = match self.advance() {
            Some(c) => c,
            None => return Err(LexError::unexpected_char('\0', position)),
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => TokenKind::Equal,
            '≠' => TokenKind::NotEqual,
            '>' => TokenKind::Greater,
            '≧' => TokenKind::GreaterEqual,
            '<' => TokenKind::Less,
            '≦' => TokenKind::LessEqual,
            '←' => TokenKind::Assign,
            '(' | '（' => TokenKind::LeftParen,
            ')' | '）' => TokenKind::RightParen,
            '[' | '［' => TokenKind::LeftBracket,
            ']' | '］' => TokenKind::RightBracket,
            ',' | '，' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' | '：' => TokenKind::Colon,
            other => return Err(LexError::unexpected_char(other, position)),
        };
        let lexeme = &self.source[start..self.current_offset()];
        Ok(Token::new(kind, lexeme, position))
    }

    /// Decides whether a `-` starts a signed numeric literal. It does when
    /// the previous token cannot end a value and a digit (or `.digit`)
    /// follows the sign.
    fn fuses_into_number(&self, tokens: &[Token]) -> bool {
        let prev_is_value = tokens
            .last()
            .is_some_and(|t| t.kind().is_value_producing());
        if prev_is_value {
            return false;
        }
        self.nth_is_digit(1) || (self.nth_char(1) == Some('.') && self.nth_is_digit(2))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Looks `n` characters ahead without consuming anything.
    fn nth_char(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, c)| c)
    }

    fn nth_is_digit(&self, n: usize) -> bool {
        self.nth_char(n).is_some_and(|c| c.is_ascii_digit())
    }

    /// Byte offset of the next unconsumed character.
    fn current_offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |&(i, _)| i)
    }

    fn current_position(&mut self) -> SourcePosition {
        let offset = self.current_offset() as u32;
        SourcePosition::new(self.line, self.column, offset)
    }

    /// Consumes one character, updating line and column. Columns count
    /// characters, so a full-width character still advances by one.
    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::super::{Keyword, LexErrorKind};
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(Token::into_kind)
            .collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_eof());
        assert_eq!(tokens[0].position(), SourcePosition::start());
    }

    #[test]
    fn exactly_one_eof_and_it_is_last() {
        let tokens = tokenize("x ← 1\ny ← 2\n").unwrap();
        let eofs = tokens.iter().filter(|t| t.kind().is_eof()).count();
        assert_eq!(eofs, 1);
        assert!(tokens.last().unwrap().kind().is_eof());
    }

    #[test]
    fn simple_expression() {
        assert_eq!(
            kinds("x + 1"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Plus,
                TokenKind::IntegerLiteral,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_one_based() {
        let tokens = tokenize("ab cd\nef").unwrap();
        assert_eq!(tokens[0].position(), SourcePosition::new(1, 1, 0));
        assert_eq!(tokens[1].position(), SourcePosition::new(1, 4, 3));
        assert_eq!(tokens[2].position(), SourcePosition::new(1, 6, 5)); // newline
        assert_eq!(tokens[3].position(), SourcePosition::new(2, 1, 6));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let tokens = tokenize("あい + 1").unwrap();
        // "あい" is six bytes but two characters.
        assert_eq!(tokens[1].position().column, 4);
        assert_eq!(tokens[1].position().offset, 7);
    }

    #[test]
    fn newlines_become_tokens() {
        let tokens = tokenize("a\n\nb").unwrap();
        assert!(matches!(tokens[1].kind(), TokenKind::Newline));
        assert!(matches!(tokens[2].kind(), TokenKind::Newline));
        assert_eq!(tokens[1].lexeme(), "\n");
    }

    #[test]
    fn keywords_and_boundary_rule() {
        assert_eq!(kinds("if")[0], TokenKind::Keyword(Keyword::If));
        assert_eq!(kinds("ifVar")[0], TokenKind::Identifier("ifVar".into()));
        assert_eq!(kinds("if_var")[0], TokenKind::Identifier("if_var".into()));
        assert_eq!(kinds("整数型")[0], TokenKind::Keyword(Keyword::IntegerType));
        assert_eq!(kinds("整数型x")[0], TokenKind::Identifier("整数型x".into()));
        assert_eq!(
            kinds("整数型の配列")[0],
            TokenKind::Keyword(Keyword::IntegerArrayType)
        );
    }

    #[test]
    fn keyword_followed_by_delimiter_is_a_keyword() {
        let toks = kinds("整数型: x");
        assert_eq!(toks[0], TokenKind::Keyword(Keyword::IntegerType));
        assert_eq!(toks[1], TokenKind::Colon);
        assert_eq!(toks[2], TokenKind::Identifier("x".into()));
    }

    #[test]
    fn every_keyword_spelling_respects_the_boundary_rule() {
        for spelling in super::super::token::keyword_spellings() {
            let tokens = tokenize(spelling).unwrap();
            assert_eq!(tokens.len(), 2, "splitting {spelling}");
            assert!(
                !matches!(tokens[0].kind(), TokenKind::Identifier(_)),
                "classifying {spelling}"
            );

            // Extending the run past the keyword demotes it to an
            // identifier.
            let extended = format!("{spelling}x");
            let tokens = tokenize(&extended).unwrap();
            assert!(
                matches!(tokens[0].kind(), TokenKind::Identifier(_)),
                "classifying {extended}"
            );
        }
    }

    #[test]
    fn supplementary_plane_identifiers() {
        // CJK Extension B characters sit above U+FFFF and take four bytes
        // each in UTF-8.
        let tokens = tokenize("𠀀𠀋 ← 1").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::Identifier("𠀀𠀋".into()));
        assert_eq!(*tokens[1].kind(), TokenKind::Assign);
        assert_eq!(tokens[1].position().column, 4);
        assert_eq!(tokens[1].position().offset, 9);
    }

    #[test]
    fn boolean_literals_come_from_the_table() {
        assert_eq!(kinds("true")[0], TokenKind::BooleanLiteral(true));
        assert_eq!(kinds("false")[0], TokenKind::BooleanLiteral(false));
        assert_eq!(kinds("truex")[0], TokenKind::Identifier("truex".into()));
    }

    #[test]
    fn numeric_literals() {
        let tokens = tokenize("42 3.14 .5 0").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::IntegerLiteral);
        assert_eq!(tokens[0].lexeme(), "42");
        assert_eq!(*tokens[1].kind(), TokenKind::RealLiteral);
        assert_eq!(tokens[1].lexeme(), "3.14");
        assert_eq!(*tokens[2].kind(), TokenKind::RealLiteral);
        assert_eq!(tokens[2].lexeme(), ".5");
        assert_eq!(*tokens[3].kind(), TokenKind::IntegerLiteral);
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        assert_eq!(
            kinds("12.x"),
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::Dot,
                TokenKind::Identifier("x".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn minus_fuses_after_non_value_token() {
        let tokens = tokenize("x ← -5").unwrap();
        assert_eq!(*tokens[2].kind(), TokenKind::IntegerLiteral);
        assert_eq!(tokens[2].lexeme(), "-5");

        let tokens = tokenize("(-5)").unwrap();
        assert_eq!(*tokens[1].kind(), TokenKind::IntegerLiteral);
        assert_eq!(tokens[1].lexeme(), "-5");

        let tokens = tokenize("-.5").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::RealLiteral);
        assert_eq!(tokens[0].lexeme(), "-.5");
    }

    #[test]
    fn minus_stays_an_operator_after_a_value() {
        let tokens = tokenize("x -5").unwrap();
        assert_eq!(*tokens[1].kind(), TokenKind::Minus);
        assert_eq!(*tokens[2].kind(), TokenKind::IntegerLiteral);
        assert_eq!(tokens[2].lexeme(), "5");

        let tokens = tokenize("a[i] - 1").unwrap();
        assert!(matches!(tokens[4].kind(), TokenKind::Minus));

        let tokens = tokenize("(x) - 1").unwrap();
        assert!(matches!(tokens[3].kind(), TokenKind::Minus));
    }

    #[test]
    fn minus_before_identifier_is_an_operator() {
        let tokens = tokenize("-x").unwrap();
        assert!(matches!(tokens[0].kind(), TokenKind::Minus));
        assert!(matches!(tokens[1].kind(), TokenKind::Identifier(_)));
    }

    #[test]
    fn string_literals_resolve_escapes() {
        let tokens = tokenize(r#""Hello\nWorld""#).unwrap();
        assert_eq!(
            *tokens[0].kind(),
            TokenKind::StringLiteral("Hello\nWorld".into())
        );
        assert_eq!(tokens[0].lexeme(), r#""Hello\nWorld""#);
    }

    #[test]
    fn single_quote_classifies_by_processed_length() {
        let tokens = tokenize("'a'").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::CharacterLiteral('a'));

        let tokens = tokenize(r"'\n'").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::CharacterLiteral('\n'));

        let tokens = tokenize(r"'\u{3042}'").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::CharacterLiteral('あ'));

        let tokens = tokenize("'ab'").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::StringLiteral("ab".into()));

        let tokens = tokenize("''").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::StringLiteral("".into()));
    }

    #[test]
    fn double_quote_is_always_a_string() {
        let tokens = tokenize("\"a\"").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::StringLiteral("a".into()));
    }

    #[test]
    fn escaped_delimiter_does_not_terminate() {
        let tokens = tokenize(r#""say \"hi\"""#).unwrap();
        assert_eq!(
            *tokens[0].kind(),
            TokenKind::StringLiteral("say \"hi\"".into())
        );
    }

    #[test]
    fn unterminated_string_error_points_at_the_opening_quote() {
        let err = tokenize("x ← \"oops").unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::UnterminatedString));
        assert_eq!(err.position.column, 5);
    }

    #[test]
    fn invalid_escape_error_carries_absolute_offset() {
        let err = tokenize(r#"ab "x\qy""#).unwrap_err();
        let LexErrorKind::InvalidEscape(inner) = &err.kind else {
            panic!("expected invalid escape, got {err:?}");
        };
        // The backslash sits at byte offset 5 of the source.
        assert_eq!(inner.offset, 5);
    }

    #[test]
    fn comments_are_skipped() {
        let tokens = tokenize("a // rest of line\nb").unwrap();
        assert!(matches!(tokens[0].kind(), TokenKind::Identifier(_)));
        assert!(matches!(tokens[1].kind(), TokenKind::Newline));
        assert!(matches!(tokens[2].kind(), TokenKind::Identifier(_)));

        let tokens = tokenize("a /* spans\nlines */ b").unwrap();
        assert_eq!(tokens.len(), 3); // a, b, eof
        assert_eq!(tokens[1].position().line, 2);
    }

    #[test]
    fn line_comment_may_end_the_input() {
        let tokens = tokenize("// trailing comment").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_eof());
    }

    #[test]
    fn unterminated_block_comment_errors_at_its_start() {
        let err = tokenize("x /* never closed").unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::UnterminatedComment));
        assert_eq!(err.position.offset, 2);
    }

    #[test]
    fn full_width_delimiters_map_to_ascii_kinds() {
        let tokens = tokenize("writeLine（x，y）").unwrap();
        assert!(matches!(tokens[1].kind(), TokenKind::LeftParen));
        assert_eq!(tokens[1].lexeme(), "（");
        assert!(matches!(tokens[3].kind(), TokenKind::Comma));
        assert!(matches!(tokens[5].kind(), TokenKind::RightParen));

        let tokens = tokenize("a［0］：").unwrap();
        assert!(matches!(tokens[1].kind(), TokenKind::LeftBracket));
        assert!(matches!(tokens[3].kind(), TokenKind::RightBracket));
        assert!(matches!(tokens[4].kind(), TokenKind::Colon));
    }

    #[test]
    fn comparison_symbols() {
        assert_eq!(
            kinds("a ≠ b ≧ c ≦ d"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::NotEqual,
                TokenKind::Identifier("b".into()),
                TokenKind::GreaterEqual,
                TokenKind::Identifier("c".into()),
                TokenKind::LessEqual,
                TokenKind::Identifier("d".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let err = tokenize("a @ b").unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::UnexpectedCharacter('@')));
        assert_eq!(err.position.column, 3);
    }

    #[test]
    fn assignment_statement_token_shape() {
        let tokens = tokenize("整数型: x ← 0").unwrap();
        assert_eq!(*tokens[0].kind(), TokenKind::Keyword(Keyword::IntegerType));
        assert_eq!(*tokens[1].kind(), TokenKind::Colon);
        assert_eq!(*tokens[2].kind(), TokenKind::Identifier("x".into()));
        assert_eq!(*tokens[3].kind(), TokenKind::Assign);
        assert_eq!(*tokens[4].kind(), TokenKind::IntegerLiteral);
    }
}
