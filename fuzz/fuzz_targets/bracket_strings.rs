// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for structured bracket strings.
//!
//! Raw bytes rarely form long balanced runs, so this target builds strings
//! from the bracket alphabet directly and checks the grammar's symmetries.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nestcheck::{reflect, sort_brackets, validate, Verdict};

const ALPHABET: [char; 7] = ['(', ')', '[', ']', '{', '}', 'x'];

#[derive(Debug)]
struct BracketInput {
    text: String,
}

impl<'a> Arbitrary<'a> for BracketInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=512)?;
        let mut text = String::with_capacity(len);
        for _ in 0..len {
            text.push(ALPHABET[u.int_in_range(0..=ALPHABET.len() - 1)?]);
        }
        Ok(BracketInput { text })
    }
}

fuzz_target!(|input: BracketInput| {
    let verdict = validate(&input.text);

    if verdict == Verdict::Valid {
        // Valid strings stay valid under reflection and sorting.
        assert_eq!(validate(&reflect(&input.text)), Verdict::Valid);
        assert_eq!(validate(&sort_brackets(&input.text)), Verdict::Valid);

        // And wrapping or doubling keeps them valid.
        let wrapped = format!("[{}]", input.text);
        assert_eq!(validate(&wrapped), Verdict::Valid);
        let doubled = format!("{0}{0}", input.text);
        assert_eq!(validate(&doubled), Verdict::Valid);
    }

    // Reflection is an involution on this alphabet.
    assert_eq!(reflect(&reflect(&input.text)), input.text);
});
