// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for fixture file parsing.
//!
//! Malformed JSON must come back as an error, never a panic. Anything that
//! parses must survive verification and re-serialization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nestcheck::{verify_fixtures, FixtureFile, Validator};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(file) = FixtureFile::from_json(json) else {
        return;
    };

    let fixtures = file.fixtures();
    let report = verify_fixtures(&Validator::default(), &fixtures);
    assert_eq!(report.total, fixtures.len());
    assert_eq!(report.passed + report.failures.len(), report.total);

    let reencoded = file.to_json().expect("parsed fixture file re-serializes");
    let reparsed = FixtureFile::from_json(&reencoded).expect("re-serialized file parses");
    assert_eq!(reparsed, file);
});
