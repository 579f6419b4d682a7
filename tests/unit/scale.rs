//! Large inputs: linear-time scan over hundreds of thousands of brackets.

use super::common::nested_run;
use nestcheck::{validate, BracketKind, Validator, ValidatorConfig, Verdict, DEFAULT_MAX_LEN};
use std::time::{Duration, Instant};

const PAIRS: usize = 200_000;

#[test]
fn test_deep_nesting_is_valid() {
    let input = nested_run(BracketKind::Round, PAIRS);
    assert_eq!(input.len(), 400_000);
    assert_eq!(validate(&input), Verdict::Valid);
}

#[test]
fn test_deep_nesting_plus_one_is_invalid() {
    let mut input = nested_run(BracketKind::Round, PAIRS);
    input.push(')');
    assert_eq!(validate(&input), Verdict::Invalid);
}

#[test]
fn test_odd_length_rejection_does_not_scan() {
    // Odd-length input is rejected from its length alone; the scan never runs,
    // so this returns far faster than a scan of the same size would take.
    let input = "(".repeat(DEFAULT_MAX_LEN - 1);
    let start = Instant::now();
    for _ in 0..1000 {
        assert_eq!(validate(&input), Verdict::Invalid);
    }
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_long_flat_concatenation() {
    let input = "()[]{}".repeat(100_000);
    assert_eq!(validate(&input), Verdict::Valid);
}

#[test]
fn test_over_bound_is_invalid() {
    let input = nested_run(BracketKind::Curly, 10);
    let validator = Validator::new(ValidatorConfig { max_len: 18 });
    assert_eq!(validator.validate(&input), Verdict::Invalid);

    let validator = Validator::new(ValidatorConfig { max_len: 20 });
    assert_eq!(validator.validate(&input), Verdict::Valid);
}

#[test]
fn test_input_above_default_bound_is_invalid() {
    let input = nested_run(BracketKind::Square, DEFAULT_MAX_LEN / 2 + 1);
    assert_eq!(validate(&input), Verdict::Invalid);
}
