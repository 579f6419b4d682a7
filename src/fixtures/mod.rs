// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Labelled test inputs for the validator, and the harness that checks them.
//!
//! A fixture is an input string, the verdict it should get, and an optional
//! provenance label saying how it was made. The label is for reports only and
//! never influences validation.
//!
//! # File format
//!
//! Fixture files are JSON with one array per expected verdict. Each entry is a
//! two-element array of input and label:
//!
//! ```text
//! {
//!   "valid":   [["{[()()]}", "pdf-example"], ["()[]", "basic"]],
//!   "invalid": [["([)()]", "pdf-example"], ["(]", null]]
//! }
//! ```
//!
//! Fixtures can be hand-written or produced by [`generate`].

pub mod generate;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Verdict;
use crate::validate::Validator;

/// Inputs longer than this are shown as `LONGSTRING!` in fixture names.
pub const DISPLAY_LIMIT: usize = 50;

// =============================================================================
// PROVENANCE
// =============================================================================

/// How a fixture string was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Built from valid pairs only.
    Basic,
    /// At least one pair was built with mismatched kinds.
    Mismatched,
    /// A string with its last character(s) cut off.
    Truncated,
    /// A valid string reversed with every role swapped.
    Reflected,
    /// A valid string with its bytes sorted.
    Sorted,
    /// A valid string with one character replaced by a non-bracket.
    Substituted,
    /// The worked examples from the problem statement.
    PdfExample,
    /// A large input for scale checks.
    Big,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::Basic => "basic",
            Provenance::Mismatched => "mismatched",
            Provenance::Truncated => "truncated",
            Provenance::Reflected => "reflected",
            Provenance::Sorted => "sorted",
            Provenance::Substituted => "substituted",
            Provenance::PdfExample => "pdf-example",
            Provenance::Big => "big",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FIXTURE
// =============================================================================

/// One input string and the verdict it must receive.
///
/// Not serialized directly; files store [`FixtureFile`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub input: String,
    pub expected: Verdict,
    pub provenance: Option<Provenance>,
}

impl Fixture {
    pub fn new(input: impl Into<String>, expected: Verdict, provenance: Provenance) -> Self {
        Self {
            input: input.into(),
            expected,
            provenance: Some(provenance),
        }
    }

    pub fn valid(input: impl Into<String>, provenance: Provenance) -> Self {
        Self::new(input, Verdict::Valid, provenance)
    }

    pub fn invalid(input: impl Into<String>, provenance: Provenance) -> Self {
        Self::new(input, Verdict::Invalid, provenance)
    }

    /// Short name for reports, e.g. `valid basic len=4 input="()[]"`.
    pub fn describe(&self) -> String {
        let label = self.provenance.map_or("unlabelled", Provenance::as_str);
        let expected = match self.expected {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
        };
        if self.input.len() > DISPLAY_LIMIT {
            format!(
                "{} {} len={} input=LONGSTRING!",
                expected,
                label,
                self.input.len()
            )
        } else {
            format!(
                "{} {} len={} input={:?}",
                expected,
                label,
                self.input.len(),
                self.input
            )
        }
    }
}

// =============================================================================
// FIXTURE FILE
// =============================================================================

type Entry = (String, Option<Provenance>);

/// On-disk layout of a fixture collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub valid: Vec<Entry>,
    #[serde(default)]
    pub invalid: Vec<Entry>,
}

impl FixtureFile {
    /// Group fixtures by expected verdict, keeping their relative order.
    pub fn from_fixtures<I>(fixtures: I) -> Self
    where
        I: IntoIterator<Item = Fixture>,
    {
        let mut file = FixtureFile::default();
        for fixture in fixtures {
            let entry = (fixture.input, fixture.provenance);
            match fixture.expected {
                Verdict::Valid => file.valid.push(entry),
                Verdict::Invalid => file.invalid.push(entry),
            }
        }
        file
    }

    /// Flatten into fixtures: all valid entries first, then all invalid ones.
    pub fn fixtures(&self) -> Vec<Fixture> {
        let groups = [
            (&self.valid, Verdict::Valid),
            (&self.invalid, Verdict::Invalid),
        ];
        let mut fixtures = Vec::with_capacity(self.len());
        for (entries, expected) in groups {
            for (input, provenance) in entries {
                fixtures.push(Fixture {
                    input: input.clone(),
                    expected,
                    provenance: *provenance,
                });
            }
        }
        fixtures
    }

    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json(&raw)?;
        debug!(path = %path.display(), fixtures = file.len(), "loaded fixture file");
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), fixtures = self.len(), "saved fixture file");
        Ok(())
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// A fixture whose verdict disagreed with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFailure {
    pub fixture: Fixture,
    pub actual: Verdict,
}

/// Outcome of running the validator over a fixture collection.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
    /// Fixture count per provenance label (`unlabelled` for `None`).
    pub by_provenance: BTreeMap<String, usize>,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every fixture and compare against its expected verdict.
///
/// Each call owns its own stack, so fixtures are checked in parallel when the
/// `parallel` feature is enabled. Failures keep input order either way.
pub fn verify_fixtures(validator: &Validator, fixtures: &[Fixture]) -> VerificationReport {
    #[cfg(feature = "parallel")]
    let verdicts: Vec<Verdict> = fixtures
        .par_iter()
        .map(|fixture| validator.validate(&fixture.input))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let verdicts: Vec<Verdict> = fixtures
        .iter()
        .map(|fixture| validator.validate(&fixture.input))
        .collect();

    let mut report = VerificationReport {
        total: fixtures.len(),
        ..VerificationReport::default()
    };

    for (fixture, actual) in fixtures.iter().zip(verdicts) {
        let label = fixture
            .provenance
            .map_or("unlabelled", Provenance::as_str)
            .to_string();
        *report.by_provenance.entry(label).or_insert(0) += 1;

        if actual == fixture.expected {
            report.passed += 1;
        } else {
            debug!(fixture = %fixture.describe(), %actual, "fixture failed");
            report.failures.push(FixtureFailure {
                fixture: fixture.clone(),
                actual,
            });
        }
    }

    info!(
        total = report.total,
        passed = report.passed,
        failed = report.failures.len(),
        "verified fixtures"
    );
    report
}
