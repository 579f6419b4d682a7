//! Edge cases of the validator: every rejection path and the canonical examples.

use super::common::{assert_verdict, CANONICAL_CASES};
use nestcheck::{is_nested, validate, Validator, ValidatorConfig, Verdict};

#[test]
fn test_canonical_cases() {
    for &(input, expected) in CANONICAL_CASES {
        assert_verdict(input, expected);
    }
}

#[test]
fn test_pdf_examples() {
    assert_verdict("{[()()]}", Verdict::Valid);
    assert_verdict("([)()]", Verdict::Invalid);
}

#[test]
fn test_empty_string_is_valid() {
    assert_verdict("", Verdict::Valid);
    assert_eq!(validate("").exit_code(), 0);
}

#[test]
fn test_single_characters_are_invalid() {
    for c in "()[]{}ax ".chars() {
        assert_verdict(&c.to_string(), Verdict::Invalid);
    }
}

#[test]
fn test_close_before_open() {
    assert_verdict(")(", Verdict::Invalid);
    assert_verdict("]()[", Verdict::Invalid);
    assert_verdict("}{", Verdict::Invalid);
}

#[test]
fn test_mismatched_groups() {
    assert_verdict("([)]", Verdict::Invalid);
    assert_verdict("{(})", Verdict::Invalid);
    assert_verdict("[(])", Verdict::Invalid);
}

#[test]
fn test_leftover_opens() {
    assert_verdict("((", Verdict::Invalid);
    assert_verdict("()((", Verdict::Invalid);
    assert_verdict("{[", Verdict::Invalid);
}

#[test]
fn test_unknown_chars_anywhere() {
    assert_verdict("(x)", Verdict::Invalid);
    assert_verdict("()x)", Verdict::Invalid);
    assert_verdict("()()x)", Verdict::Invalid);
    assert_verdict("ab", Verdict::Invalid);
    assert_verdict("( )", Verdict::Invalid);
    assert_verdict("(\0)", Verdict::Invalid);
    // Unicode look-alikes are not brackets.
    assert_verdict("（）", Verdict::Invalid);
}

#[test]
fn test_unknown_char_in_otherwise_valid_even_string() {
    assert_verdict("(())[]x}", Verdict::Invalid);
    assert_verdict("x()[]{}y", Verdict::Invalid);
}

#[test]
fn test_is_nested_matches_validate() {
    for &(input, expected) in CANONICAL_CASES {
        assert_eq!(is_nested(input), expected.is_valid(), "input {:?}", input);
    }
}

#[test]
fn test_length_bound_is_a_verdict_not_an_error() {
    let validator = Validator::new(ValidatorConfig { max_len: 8 });
    assert_eq!(validator.validate("{[()()]}"), Verdict::Valid);
    assert_eq!(validator.validate("{[()()]}()"), Verdict::Invalid);
    assert_eq!(validator.config().max_len, 8);
}
