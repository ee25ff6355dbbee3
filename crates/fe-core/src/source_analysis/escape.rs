// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Escape-sequence processing for string and character literal bodies.
//!
//! The lexer hands the raw text between literal delimiters to [`process`],
//! which resolves backslash escapes into literal characters. The module is
//! deliberately self-contained so the escape rules can be tested without a
//! lexer in the loop.
//!
//! Recognized sequences: `\n`, `\t`, `\r`, `\\`, `\"`, `\'`, and
//! `\u{H…H}` with one to eight case-insensitive hex digits naming a valid
//! Unicode scalar. Everything else is a hard error; unknown escapes are
//! never passed through silently.

use ecow::EcoString;

use super::EscapeSequenceError;

/// Resolves all escape sequences in `content`.
///
/// # Errors
///
/// Returns an [`EscapeSequenceError`] carrying the byte offset of the
/// backslash that introduced the malformed sequence.
pub fn process(content: &str) -> Result<String, EscapeSequenceError> {
    scan(content).map(|(processed, _)| processed)
}

/// Returns `true` if every escape sequence in `content` is well-formed.
#[must_use]
pub fn validate(content: &str) -> bool {
    scan(content).is_ok()
}

/// Counts the escape sequences in `content`.
///
/// # Errors
///
/// Fails on the first malformed sequence, like [`process`].
pub fn count(content: &str) -> Result<usize, EscapeSequenceError> {
    scan(content).map(|(_, escapes)| escapes)
}

/// Single scan shared by [`process`], [`validate`], and [`count`].
fn scan(content: &str) -> Result<(String, usize), EscapeSequenceError> {
    let mut processed = String::with_capacity(content.len());
    let mut escapes = 0;
    let mut chars = content.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            processed.push(c);
            continue;
        }

        escapes += 1;
        match chars.next() {
            None => {
                return Err(EscapeSequenceError::new(
                    "incomplete escape sequence",
                    offset,
                ));
            }
            Some((_, 'n')) => processed.push('\n'),
            Some((_, 't')) => processed.push('\t'),
            Some((_, 'r')) => processed.push('\r'),
            Some((_, '\\')) => processed.push('\\'),
            Some((_, '"')) => processed.push('"'),
            Some((_, '\'')) => processed.push('\''),
            Some((_, 'u')) => processed.push(scan_unicode_escape(&mut chars, offset)?),
            Some((_, other)) => {
                return Err(EscapeSequenceError::new(
                    format!("unknown escape sequence '\\{other}'"),
                    offset,
                ));
            }
        }
    }

    Ok((processed, escapes))
}

/// Scans the `{H…H}` tail of a `\u` escape. `offset` is the byte offset of
/// the introducing backslash, used for error reporting.
fn scan_unicode_escape(
    chars: &mut std::str::CharIndices<'_>,
    offset: usize,
) -> Result<char, EscapeSequenceError> {
    match chars.next() {
        Some((_, '{')) => {}
        _ => {
            return Err(EscapeSequenceError::new(
                "expected '{' after '\\u'",
                offset,
            ));
        }
    }

    let mut digits = EcoString::new();
    loop {
        match chars.next() {
            None => {
                return Err(EscapeSequenceError::new(
                    "unterminated unicode escape, expected '}'",
                    offset,
                ));
            }
            Some((_, '}')) => break,
            Some((_, d)) if d.is_ascii_hexdigit() => digits.push(d),
            Some((_, d)) => {
                return Err(EscapeSequenceError::new(
                    format!("invalid hex digit '{d}' in unicode escape"),
                    offset,
                ));
            }
        }
    }

    if digits.is_empty() {
        return Err(EscapeSequenceError::new(
            "unicode escape needs at least one hex digit",
            offset,
        ));
    }
    if digits.len() > 8 {
        return Err(EscapeSequenceError::new(
            "unicode escape has more than eight hex digits",
            offset,
        ));
    }

    // Eight hex digits fit in u32, so this cannot overflow.
    let value = u32::from_str_radix(&digits, 16).map_err(|_| {
        EscapeSequenceError::new("invalid unicode escape", offset)
    })?;

    char::from_u32(value).ok_or_else(|| {
        EscapeSequenceError::new(
            format!("U+{value:X} is not a valid unicode scalar value"),
            offset,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(process("hello").unwrap(), "hello");
        assert_eq!(process("").unwrap(), "");
        assert_eq!(process("こんにちは").unwrap(), "こんにちは");
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(process(r"a\nb").unwrap(), "a\nb");
        assert_eq!(process(r"a\tb").unwrap(), "a\tb");
        assert_eq!(process(r"a\rb").unwrap(), "a\rb");
        assert_eq!(process(r"a\\b").unwrap(), "a\\b");
        assert_eq!(process(r#"a\"b"#).unwrap(), "a\"b");
        assert_eq!(process(r"a\'b").unwrap(), "a'b");
    }

    #[test]
    fn unicode_escapes() {
        assert_eq!(process(r"\u{41}").unwrap(), "A");
        assert_eq!(process(r"\u{3042}").unwrap(), "あ");
        assert_eq!(process(r"\u{1F600}").unwrap(), "😀");
        // Case-insensitive digits, up to eight of them
        assert_eq!(process(r"\u{3042}").unwrap(), process(r"\u{00003042}").unwrap());
        assert_eq!(process(r"\u{2b}").unwrap(), process(r"\u{2B}").unwrap());
    }

    #[test]
    fn trailing_backslash_is_an_error() {
        let err = process("abc\\").unwrap_err();
        assert_eq!(err.message, "incomplete escape sequence");
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn unknown_escape_letter_is_an_error() {
        let err = process(r"a\qb").unwrap_err();
        assert_eq!(err.message, "unknown escape sequence '\\q'");
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn malformed_unicode_escapes() {
        assert!(process(r"\u41").is_err()); // missing braces
        assert!(process(r"\u{}").is_err()); // zero digits
        assert!(process(r"\u{123456789}").is_err()); // nine digits
        assert!(process(r"\u{12G4}").is_err()); // non-hex digit
        assert!(process(r"\u{1F60").is_err()); // unterminated
        assert!(process(r"\u{D800}").is_err()); // surrogate, not a scalar
        assert!(process(r"\u{110000}").is_err()); // beyond U+10FFFF
    }

    #[test]
    fn error_offset_points_at_backslash() {
        let err = process(r"ab\u{D800}").unwrap_err();
        assert_eq!(err.offset, 2);

        let err = process("あ\\q").unwrap_err();
        assert_eq!(err.offset, "あ".len());
    }

    #[test]
    fn validate_mirrors_process() {
        assert!(validate(r"a\nb\u{41}"));
        assert!(validate("no escapes"));
        assert!(!validate("dangling\\"));
        assert!(!validate(r"\u{}"));
    }

    #[test]
    fn count_counts_escapes() {
        assert_eq!(count("plain").unwrap(), 0);
        assert_eq!(count(r"\n\t\u{41}").unwrap(), 3);
        assert_eq!(count(r"a\\b").unwrap(), 1);
        assert!(count(r"\q").is_err());
    }
}
