//! Closure properties of the nesting grammar.

use super::common::wrap;
use super::{non_bracket_strategy, non_empty_nested_strategy, nested_strategy};
use nestcheck::{reflect, sort_brackets, truncate, validate, BracketKind, Verdict};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every string built from the productions is valid.
    #[test]
    fn prop_productions_are_valid(s in nested_strategy()) {
        prop_assert_eq!(validate(&s), Verdict::Valid, "input {:?}", s);
    }

    /// Concatenation of two valid strings is valid.
    #[test]
    fn prop_concatenation_closed(u in nested_strategy(), v in nested_strategy()) {
        let joined = format!("{}{}", u, v);
        prop_assert_eq!(validate(&joined), Verdict::Valid);
    }

    /// Wrapping a valid string in any single pair is valid.
    #[test]
    fn prop_wrapping_closed(u in nested_strategy()) {
        for kind in BracketKind::ALL {
            let wrapped = wrap(kind, &u);
            prop_assert_eq!(validate(&wrapped), Verdict::Valid, "input {:?}", wrapped);
        }
    }

    /// Reverse-and-swap maps valid strings to valid strings.
    #[test]
    fn prop_reflection_preserves_validity(s in nested_strategy()) {
        let reflected = reflect(&s);
        prop_assert_eq!(validate(&reflected), Verdict::Valid, "reflect({:?}) = {:?}", s, reflected);
        prop_assert_eq!(reflect(&reflected), s);
    }

    /// Sorting the bytes of a valid string keeps it valid.
    #[test]
    fn prop_sorting_preserves_validity(s in nested_strategy()) {
        prop_assert_eq!(validate(&sort_brackets(&s)), Verdict::Valid);
    }

    /// Dropping the last character of a non-empty valid string breaks it.
    #[test]
    fn prop_truncation_breaks_validity(s in non_empty_nested_strategy()) {
        let cut = truncate(&s, 1);
        prop_assert_eq!(cut.len() % 2, 1);
        prop_assert_eq!(validate(&cut), Verdict::Invalid);
    }

    /// Replacing any one character with a non-bracket breaks it.
    #[test]
    fn prop_substitution_breaks_validity(
        s in non_empty_nested_strategy(),
        index in any::<prop::sample::Index>(),
        replacement in non_bracket_strategy(),
    ) {
        let position = index.index(s.len());
        let substituted = nestcheck::substitute(&s, position, replacement);
        prop_assert_eq!(validate(&substituted), Verdict::Invalid, "input {:?}", substituted);
    }

    /// Odd lengths are always invalid, whatever the characters.
    #[test]
    fn prop_odd_length_invalid(s in ".{0,40}") {
        prop_assume!(s.len() % 2 == 1);
        prop_assert_eq!(validate(&s), Verdict::Invalid);
    }
}
