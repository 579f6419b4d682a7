//! Differential testing: the validator against reference recognizers.

use super::common::reference_is_nested;
use super::oracles::{oracle_backward_match, oracle_recursive_descent};
use super::{bracket_soup_strategy, nested_strategy};
use nestcheck::{is_nested, validate};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Random bracket strings: every recognizer gives the same answer.
    #[test]
    fn diff_bracket_soup(s in bracket_soup_strategy()) {
        let expected = oracle_recursive_descent(&s);
        prop_assert_eq!(is_nested(&s), expected, "validator vs recursive descent on {:?}", s);
        prop_assert_eq!(reference_is_nested(&s), expected, "rewriting vs recursive descent on {:?}", s);
        prop_assert_eq!(oracle_backward_match(&s), expected, "backward match vs recursive descent on {:?}", s);
    }

    /// Mixed alphabet with a few non-brackets sprinkled in.
    #[test]
    fn diff_mixed_alphabet(s in "[\\(\\)\\[\\]\\{\\}a ]{0,20}") {
        prop_assert_eq!(validate(&s).is_valid(), oracle_recursive_descent(&s), "input {:?}", s);
    }

    /// Valid strings with one character swapped for another bracket.
    #[test]
    fn diff_single_bracket_swap(
        s in nested_strategy(),
        index in any::<prop::sample::Index>(),
        replacement in prop::sample::select(vec!['(', ')', '[', ']', '{', '}']),
    ) {
        prop_assume!(!s.is_empty());
        let position = index.index(s.len());
        let mutated = nestcheck::substitute(&s, position, replacement);
        prop_assert_eq!(is_nested(&mutated), oracle_recursive_descent(&mutated), "input {:?}", mutated);
    }
}
