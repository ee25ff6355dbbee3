// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the lexer.
//!
//! These check the structural guarantees that must hold for *every* input:
//! tokenization never panics, the token sequence always ends with exactly
//! one end-of-file marker, and positions never move backwards.

use proptest::prelude::*;

use super::{tokenize, TokenKind};

/// Strategy for identifiers, including Japanese ones.
fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,10}",
        "[ぁ-ん一-鿋][ぁ-ん一-鿋0-9]{0,5}",
    ]
}

proptest! {
    #[test]
    fn tokenize_never_panics(source in any::<String>()) {
        // Errors are fine; panics are not.
        let _ = tokenize(&source);
    }

    #[test]
    fn tokenize_is_deterministic(source in any::<String>()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn successful_tokenization_ends_with_one_eof(source in any::<String>()) {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert!(tokens.last().is_some_and(|t| t.kind().is_eof()));
            let eofs = tokens.iter().filter(|t| t.kind().is_eof()).count();
            prop_assert_eq!(eofs, 1);
        }
    }

    #[test]
    fn token_offsets_never_move_backwards(source in any::<String>()) {
        if let Ok(tokens) = tokenize(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].position().offset <= pair[1].position().offset);
                prop_assert!(pair[0].position().line <= pair[1].position().line);
            }
        }
    }

    #[test]
    fn identifiers_always_tokenize(name in identifier()) {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        // The run either is a keyword/boolean or stays an identifier; it is
        // never split into multiple tokens.
        prop_assert_eq!(tokens[0].lexeme(), name);
    }

    #[test]
    fn integers_tokenize_as_integer_literals(value in 0i64..=i64::MAX) {
        let source = value.to_string();
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].kind(), &TokenKind::IntegerLiteral);
        prop_assert_eq!(tokens[0].lexeme(), source);
    }

    #[test]
    fn reals_tokenize_as_real_literals(whole in 0u32..10_000, frac in 0u32..10_000) {
        let source = format!("{whole}.{frac}");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].kind(), &TokenKind::RealLiteral);
        prop_assert_eq!(tokens[0].lexeme(), source);
    }

    #[test]
    fn strings_without_escapes_round_trip(content in "[a-zA-Z0-9 ぁ-ん]{0,20}") {
        let source = format!("\"{content}\"");
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(
            tokens[0].kind(),
            &TokenKind::StringLiteral(content.as_str().into())
        );
    }

    #[test]
    fn whitespace_between_tokens_is_irrelevant(
        a in identifier(),
        b in identifier(),
        spaces in 1usize..5,
    ) {
        let narrow = format!("{a} {b}");
        let wide = format!("{a}{}{b}", " ".repeat(spaces));
        let narrow_kinds: Vec<_> = tokenize(&narrow)
            .unwrap()
            .into_iter()
            .map(super::Token::into_kind)
            .collect();
        let wide_kinds: Vec<_> = tokenize(&wide)
            .unwrap()
            .into_iter()
            .map(super::Token::into_kind)
            .collect();
        prop_assert_eq!(narrow_kinds, wide_kinds);
    }
}
