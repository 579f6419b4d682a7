// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the validator on arbitrary UTF-8.
//!
//! Any string must get a verdict without panicking, and the verdict must match
//! the rewriting reference recognizer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nestcheck::testing::reference_is_nested;
use nestcheck::{validate, Verdict};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Property 1: never panics, always a verdict
    let verdict = validate(input);

    // Property 2: odd length is always invalid
    if input.len() % 2 == 1 {
        assert_eq!(verdict, Verdict::Invalid, "odd length judged valid: {:?}", input);
    }

    // Property 3: agrees with the reference (quadratic, so keep it short)
    if input.len() <= 256 {
        assert_eq!(
            verdict.is_valid(),
            reference_is_nested(input),
            "disagreement with reference on {:?}",
            input
        );
    }
});
