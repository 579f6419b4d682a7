// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seeded generator for valid and invalid bracket strings.
//!
//! Strings are grown one pair at a time. Each step picks one of three moves,
//! mirroring the grammar's production rules:
//!
//! - **nest**: `s` becomes `(s)`, `[s]` or `{s}`
//! - **append**: `s` becomes `s()`
//! - **prepend**: `s` becomes `()s`
//!
//! With mistakes allowed, each step draws a mismatched pair such as `(]` half
//! the time. Every pair built this way wraps a contiguous substring, so the
//! stack scan pairs exactly the characters the generator paired; one
//! mismatched pair is therefore enough to make the whole string invalid.
//!
//! Derived strings come from three transforms that keep validity
//! (reflect, sort) or break it (truncate, substitute).
//!
//! All randomness flows from [`GeneratorConfig::seed`], so a config always
//! produces the same fixture file.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{Fixture, FixtureFile, Provenance};
use crate::error::{Error, Result};
use crate::types::{Bracket, BracketKind};
use crate::validate::DEFAULT_MAX_LEN;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 0x5EED_B4AC_4E75;

/// Rebuilds allowed before giving up on placing a mismatched pair.
///
/// A length-2 build misses with probability 1/2 per attempt.
pub const MAX_ATTEMPTS: usize = 64;

/// Replacement characters for substitution fixtures. None of them are brackets.
pub const SUBSTITUTES: &[char] = &['a', 'x', '0', ' ', '<', '>', '|', '-', 'é'];

/// The canonical valid example.
pub const PDF_VALID: &str = "{[()()]}";

/// The canonical invalid example.
pub const PDF_INVALID: &str = "([)()]";

// =============================================================================
// CONFIGURATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for every random choice in a run.
    pub seed: u64,
    /// Distance between consecutive generated lengths. Must be even.
    pub step: usize,
    /// Generated lengths stay below this.
    pub max_length: usize,
    /// Length of the optional big valid/mismatched pair of fixtures.
    /// At most [`DEFAULT_MAX_LEN`], so the valid one verifies under the default bound.
    pub big_length: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            step: 4,
            max_length: 40,
            big_length: None,
        }
    }
}

// =============================================================================
// STRING BUILDING
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Move {
    Nest,
    Append,
    Prepend,
}

const MOVES: [Move; 3] = [Move::Nest, Move::Append, Move::Prepend];

/// Per-build state: whether mistakes may be drawn and whether one was.
struct PairStrategy {
    allow_mistakes: bool,
    mistake_made: bool,
}

impl PairStrategy {
    fn new(allow_mistakes: bool) -> Self {
        Self {
            allow_mistakes,
            mistake_made: false,
        }
    }

    /// An (open, close) pair. Mismatched with probability 1/2 when allowed.
    fn pick_pair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (u8, u8) {
        let open = BracketKind::ALL[rng.gen_range(0..BracketKind::ALL.len())];
        let close = if self.allow_mistakes && rng.gen_bool(0.5) {
            self.mistake_made = true;
            let others: Vec<BracketKind> = BracketKind::ALL
                .iter()
                .copied()
                .filter(|&kind| kind != open)
                .collect();
            others[rng.gen_range(0..others.len())]
        } else {
            open
        };
        (open.open_char() as u8, close.close_char() as u8)
    }

    fn step<R: Rng + ?Sized>(&mut self, buf: &mut VecDeque<u8>, rng: &mut R) {
        let action = MOVES[rng.gen_range(0..MOVES.len())];
        let (open, close) = self.pick_pair(rng);
        match action {
            Move::Nest => {
                buf.push_front(open);
                buf.push_back(close);
            }
            Move::Append => {
                buf.push_back(open);
                buf.push_back(close);
            }
            Move::Prepend => {
                buf.push_front(close);
                buf.push_front(open);
            }
        }
    }
}

/// Build a bracket string of exactly `length` bytes.
///
/// Without mistakes the result is always properly nested. With mistakes the
/// build is repeated until at least one mismatched pair was placed, which
/// guarantees an invalid string; short lengths can otherwise come out clean.
pub fn build_string<R: Rng + ?Sized>(
    length: usize,
    allow_mistakes: bool,
    rng: &mut R,
) -> Result<String> {
    if length % 2 == 1 {
        return Err(Error::OddLength(length));
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let mut strategy = PairStrategy::new(allow_mistakes);
        let mut buf = VecDeque::with_capacity(length);
        for _ in 0..length / 2 {
            strategy.step(&mut buf, rng);
        }

        if !allow_mistakes || strategy.mistake_made {
            return Ok(buf.into_iter().map(char::from).collect());
        }
        debug!(attempt, length, "no mismatched pair placed, rebuilding");
    }

    Err(Error::MistakeNotInjected {
        length,
        attempts: MAX_ATTEMPTS,
    })
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Drop the last `by` characters.
pub fn truncate(s: &str, by: usize) -> String {
    let keep = s.chars().count().saturating_sub(by);
    s.chars().take(keep).collect()
}

/// Reverse the string and swap every open for its close and vice versa.
///
/// Maps properly nested strings to properly nested strings. Non-bracket
/// characters are reversed but otherwise left alone.
pub fn reflect(s: &str) -> String {
    s.chars()
        .rev()
        .map(|c| match Bracket::classify(c) {
            Some(bracket) => Bracket {
                kind: bracket.kind,
                role: bracket.role.flip(),
            }
            .to_char(),
            None => c,
        })
        .collect()
}

/// Sort the characters.
///
/// A properly nested string has as many opens as closes of each kind, and each
/// open sorts directly before its close (`(` `)`, `[` `]`, `{` `}`), so the
/// result is `((…))[[…]]{{…}}`: still properly nested.
pub fn sort_brackets(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Replace the character at char index `index` with `replacement`.
pub fn substitute(s: &str, index: usize, replacement: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == index { replacement } else { c })
        .collect()
}

// =============================================================================
// FIXTURE GENERATION
// =============================================================================

/// Produce a full fixture file from `config`.
pub fn generate(config: &GeneratorConfig) -> Result<FixtureFile> {
    if config.step == 0 || config.step % 2 == 1 {
        return Err(Error::OddStep(config.step));
    }
    if let Some(length) = config.big_length.filter(|&length| length > DEFAULT_MAX_LEN) {
        return Err(Error::BigLengthTooLong {
            length,
            max_len: DEFAULT_MAX_LEN,
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut fixtures = Vec::new();

    for length in (0..config.max_length).step_by(config.step) {
        let basic = build_string(length, false, &mut rng)?;
        fixtures.push(Fixture::valid(reflect(&basic), Provenance::Reflected));
        fixtures.push(Fixture::valid(sort_brackets(&basic), Provenance::Sorted));

        if !basic.is_empty() {
            fixtures.push(Fixture::invalid(truncate(&basic, 1), Provenance::Truncated));

            let index = rng.gen_range(0..basic.len());
            let replacement = SUBSTITUTES.choose(&mut rng).copied().unwrap_or('x');
            fixtures.push(Fixture::invalid(
                substitute(&basic, index, replacement),
                Provenance::Substituted,
            ));
        }
        fixtures.push(Fixture::valid(basic, Provenance::Basic));
    }
    fixtures.push(Fixture::valid(PDF_VALID, Provenance::PdfExample));

    for length in (2..config.max_length).step_by(config.step) {
        let mismatched = build_string(length, true, &mut rng)?;
        let cut = build_string(length, true, &mut rng)?;
        fixtures.push(Fixture::invalid(mismatched, Provenance::Mismatched));
        fixtures.push(Fixture::invalid(truncate(&cut, 1), Provenance::Truncated));
    }
    fixtures.push(Fixture::invalid(PDF_INVALID, Provenance::PdfExample));

    if let Some(length) = config.big_length {
        fixtures.push(Fixture::valid(
            build_string(length, false, &mut rng)?,
            Provenance::Big,
        ));
        if length > 0 {
            fixtures.push(Fixture::invalid(
                build_string(length, true, &mut rng)?,
                Provenance::Big,
            ));
        }
    }

    let file = FixtureFile::from_fixtures(fixtures);
    info!(
        seed = config.seed,
        valid = file.valid.len(),
        invalid = file.invalid.len(),
        "generated fixtures"
    );
    Ok(file)
}
