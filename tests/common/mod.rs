//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use nestcheck::{validate, Verdict};

// Re-export canonical test utilities from nestcheck::testing
pub use nestcheck::testing::{nested_run, reference_is_nested, wrap, CANONICAL_CASES};

/// Hand-authored fixture file shipped with the repo.
pub fn handwritten_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/fixtures/handwritten.json")
}

/// Run the `nestcheck` binary with `args`, colors off and logging quiet.
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_nestcheck"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("NESTCHECK_MAX_LEN")
        .output()
        .expect("failed to run nestcheck binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Assert a verdict with the input in the failure message.
pub fn assert_verdict(input: &str, expected: Verdict) {
    assert_eq!(
        validate(input),
        expected,
        "validate({:?}) should be {}",
        input,
        expected
    );
}
