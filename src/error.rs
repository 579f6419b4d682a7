// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for everything that is not a verdict.
//!
//! A string that fails the grammar is `Verdict::Invalid`, never an `Error`.
//! The variants here are usage and environment failures: input that cannot be
//! handed to the validator at all, fixture files that cannot be read or parsed,
//! and generator parameters that cannot produce what was asked for.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input was not a string (e.g. a non-UTF-8 command-line argument).
    #[error("expected a UTF-8 string, got {lossy:?}")]
    NonUtf8Input { lossy: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generated strings are built one pair at a time.
    #[error("lengths of generated strings must be even, got {0}")]
    OddLength(usize),

    #[error("generator step must be even and non-zero, got {0}")]
    OddStep(usize),

    /// A big fixture the default validator would reject for its length alone.
    #[error("big length {length} exceeds the validator's default bound of {max_len} bytes")]
    BigLengthTooLong { length: usize, max_len: usize },

    #[error("no mismatched pair placed in a string of length {length} after {attempts} attempts")]
    MistakeNotInjected { length: usize, attempts: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
