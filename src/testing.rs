//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides an independent reference recognizer and canonical inputs so
//! every test suite agrees on what "properly nested" means.

#![doc(hidden)]

use crate::types::{BracketKind, Verdict};

/// Hand-picked inputs with known verdicts, covering every rejection path.
pub const CANONICAL_CASES: &[(&str, Verdict)] = &[
    ("", Verdict::Valid),
    ("()", Verdict::Valid),
    ("[]", Verdict::Valid),
    ("{}", Verdict::Valid),
    ("{[()()]}", Verdict::Valid),
    ("()[]{}", Verdict::Valid),
    ("([{}])", Verdict::Valid),
    ("(", Verdict::Invalid),
    (")", Verdict::Invalid),
    (")(", Verdict::Invalid),
    ("(]", Verdict::Invalid),
    ("([)]", Verdict::Invalid),
    ("([)()]", Verdict::Invalid),
    ("((", Verdict::Invalid),
    ("(a)", Verdict::Invalid),
    ("(ab)", Verdict::Invalid),
    ("( )(", Verdict::Invalid),
    ("é", Verdict::Invalid),
];

/// Wrap `inner` in one pair of `kind`.
pub fn wrap(kind: BracketKind, inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 2);
    out.push(kind.open_char());
    out.push_str(inner);
    out.push(kind.close_char());
    out
}

/// `pairs` opens of `kind` followed by `pairs` closes: `((( ... )))`.
pub fn nested_run(kind: BracketKind, pairs: usize) -> String {
    let mut out = String::with_capacity(pairs * 2);
    out.extend(std::iter::repeat(kind.open_char()).take(pairs));
    out.extend(std::iter::repeat(kind.close_char()).take(pairs));
    out
}

/// Reference recognizer that shares no code with the validator.
///
/// Works by rewriting: delete adjacent `()`, `[]` and `{}` until nothing
/// changes. The input is properly nested iff nothing is left. Quadratic, so
/// keep inputs small.
pub fn reference_is_nested(input: &str) -> bool {
    let mut current = input.to_string();
    loop {
        let reduced = current
            .replace("()", "")
            .replace("[]", "")
            .replace("{}", "");
        if reduced.len() == current.len() {
            return reduced.is_empty();
        }
        current = reduced;
    }
}
