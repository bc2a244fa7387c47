#![cfg(feature = "codegen")]
//! Property-based tests for the overload generator.
//!
//! ## Label Sequence
//! - **Single characters**: indices below the range size map to `low + i`
//! - **Length**: index `i` has exactly as many characters as the bijective
//!   numeral needs digits to reach it
//! - **Monotonicity**: every label is greater than the one before it
//! - **Start shift**: starting at `s` equals the default sequence shifted by `s - low`
//!
//! ## Overload Families
//! - **Shape**: arity `n` uses `n + 1` type labels, `n` parameter labels, `n` arrows
//! - **Stability under growth**: `generate(n)` is a prefix of `generate(n + 1)`
//! - **Determinism**: generating twice yields identical text

use std::cmp::Ordering;

use pipable::codegen::{
    Arity, DeclarationKind, LOWERCASE, LabelRange, LabelSequence, OverloadSet, UPPERCASE,
    assemble, compare_labels, generate_overloads, letter_identifier,
};
use proptest::prelude::*;
use rstest::rstest;

fn kind() -> impl Strategy<Value = DeclarationKind> {
    prop::sample::select(DeclarationKind::ALL.to_vec())
}

/// Number of digits the bijective numeral needs for `index`.
fn expected_length(index: usize, base: usize) -> usize {
    let mut length = 1;
    let mut capacity = base;
    let mut covered = base;
    while index >= covered {
        capacity *= base;
        covered += capacity;
        length += 1;
    }
    length
}

// =============================================================================
// Label Sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_indices_below_base_are_single_characters(index in 0usize..26) {
        let label = letter_identifier(index, UPPERCASE, 'A');
        let expected = char::from(b'A' + u8::try_from(index).unwrap());
        prop_assert_eq!(label, expected.to_string());
    }

    #[test]
    fn prop_label_length_matches_digit_count(index in 0usize..100_000) {
        let label = letter_identifier(index, LOWERCASE, 'a');
        prop_assert_eq!(label.chars().count(), expected_length(index, 26));
    }

    #[test]
    fn prop_labels_strictly_increase(index in 1usize..100_000) {
        let previous = letter_identifier(index - 1, UPPERCASE, 'A');
        let current = letter_identifier(index, UPPERCASE, 'A');
        prop_assert_eq!(compare_labels(&previous, &current), Ordering::Less);
    }

    #[test]
    fn prop_labels_stay_inside_the_range(index in 0usize..100_000, start in 0u8..26) {
        let start = char::from(b'a' + start);
        let label = letter_identifier(index, LOWERCASE, start);
        prop_assert!(label.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn prop_start_shifts_the_default_sequence(index in 0usize..10_000, shift in 0usize..26) {
        let start = char::from(b'A' + u8::try_from(shift).unwrap());
        prop_assert_eq!(
            letter_identifier(index, UPPERCASE, start),
            letter_identifier(index + shift, UPPERCASE, 'A')
        );
    }

    #[test]
    fn prop_sequence_matches_indexed_labels(count in 0usize..200) {
        let labels: Vec<String> = LabelSequence::from_low(UPPERCASE).take(count).collect();
        for (index, label) in labels.iter().enumerate() {
            prop_assert_eq!(label, &letter_identifier(index, UPPERCASE, 'A'));
        }
    }

    #[test]
    fn prop_small_alphabets_are_bijective(index in 0usize..5_000) {
        let binary = LabelRange::new('0', '1');
        let label = letter_identifier(index, binary, '0');
        prop_assert_eq!(label.chars().count(), expected_length(index, 2));
    }
}

#[rstest]
#[case(0, "A")]
#[case(25, "Z")]
#[case(26, "AA")]
#[case(51, "AZ")]
#[case(52, "BA")]
#[case(701, "ZZ")]
#[case(702, "AAA")]
#[case(18_277, "ZZZ")]
#[case(18_278, "AAAA")]
fn test_uppercase_labels(#[case] index: usize, #[case] expected: &str) {
    assert_eq!(letter_identifier(index, UPPERCASE, 'A'), expected);
}

// =============================================================================
// Overload Families
// =============================================================================

proptest! {
    #[test]
    fn prop_declaration_shape_follows_arity(kind in kind(), stages in 1usize..=64) {
        let arity = Arity::new(stages).unwrap();
        let declaration = assemble(kind, arity);

        prop_assert_eq!(declaration.type_labels().len(), stages + 1);
        prop_assert_eq!(declaration.parameter_labels().len(), stages);
        prop_assert_eq!(declaration.transitions(), stages);
        prop_assert_eq!(declaration.text().matches("=>").count(), stages);
    }

    #[test]
    fn prop_type_and_parameter_labels_are_disjoint(kind in kind(), stages in 1usize..=40) {
        let declaration = assemble(kind, Arity::new(stages).unwrap());
        for parameter in declaration.parameter_labels() {
            prop_assert!(!declaration.type_labels().contains(parameter));
        }
    }

    #[test]
    fn prop_families_have_max_arity_entries(max in 1usize..=32) {
        let overloads = generate_overloads(max);
        prop_assert_eq!(overloads.iter().count(), 4);
        for (kind, family) in overloads.iter() {
            prop_assert_eq!(family.len(), max);
            for (position, declaration) in family.iter().enumerate() {
                prop_assert_eq!(declaration.kind(), kind);
                prop_assert_eq!(declaration.arity().get(), position + 1);
            }
        }
    }

    #[test]
    fn prop_growth_extends_previous_families(max in 2usize..=24) {
        let smaller = generate_overloads(max - 1);
        let larger = generate_overloads(max);
        for kind in DeclarationKind::ALL {
            prop_assert_eq!(smaller.family(kind), &larger.family(kind)[..max - 1]);
            prop_assert!(larger.joined(kind).starts_with(&smaller.joined(kind)));
        }
    }

    #[test]
    fn prop_generation_is_deterministic(max in 1usize..=24) {
        prop_assert_eq!(generate_overloads(max), generate_overloads(max));
    }

    #[test]
    fn prop_joined_uses_single_spaces(kind in kind(), max in 1usize..=16) {
        let overloads = generate_overloads(max);
        let joined = overloads.joined(kind);
        prop_assert_eq!(joined.matches("; ").count(), max - 1);
        prop_assert!(joined.ends_with(';'));
    }
}

#[test]
fn test_zero_arity_is_rejected() {
    assert!(OverloadSet::try_generate(0).is_err());
    assert!(Arity::try_from(0).is_err());
}

#[test]
#[should_panic(expected = "arity must be at least 1")]
fn test_generate_overloads_panics_on_zero() {
    let _ = generate_overloads(0);
}

#[test]
fn test_default_set_reaches_sixteen_stages() {
    let overloads = OverloadSet::default();
    assert_eq!(overloads.max_arity().get(), 16);
    let last = overloads.family(DeclarationKind::Function).last().unwrap();
    assert!(last.text().starts_with(
        "export function pipe<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q>(value: A, f: (v: A) => B,"
    ));
    assert!(last.text().ends_with("u: (v: P) => Q): Q;"));
}
