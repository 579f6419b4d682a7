// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The nesting validator: one left-to-right scan over a private stack.
//!
//! A string is properly nested when it is empty, when it is `(U)`, `[U]` or
//! `{U}` for a properly nested `U`, or when it is `UV` for properly nested `U`
//! and `V`. The scan recognizes exactly this language:
//!
//! 1. Inputs over the configured bound are rejected without looking at them.
//! 2. Odd lengths are rejected without a scan (every open needs a close).
//! 3. Opens push their kind. Closes pop and must find the same kind.
//! 4. Anything that is not one of the six brackets stops the scan.
//! 5. The stack must be empty at the end.
//!
//! Linear time, linear space, no shared state. Each call owns its stack, so
//! any number of calls may run in parallel without coordination.
//!
//! Lengths and offsets are in bytes. All six brackets are single ASCII bytes
//! and every byte of a multi-byte UTF-8 scalar is >= 0x80, so a byte scan gives
//! the same verdict as a char scan.

use std::fmt;

use tracing::debug;

use crate::contracts;
use crate::types::{Bracket, BracketKind, BracketRole, Verdict};

/// Default upper bound on input length, in bytes.
///
/// Large enough for 200 000 nested pairs (400 000 bytes) with room to spare.
pub const DEFAULT_MAX_LEN: usize = 1_000_000;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables for a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Inputs longer than this (in bytes) are `Invalid`, never an error.
    pub max_len: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

// =============================================================================
// PENDING STACK
// =============================================================================

/// Kinds of the brackets opened so far and not yet closed, oldest first.
///
/// Scoped to one validation call: created empty, dropped at the end.
#[derive(Debug, Default)]
pub struct PendingStack {
    kinds: Vec<BracketKind>,
}

impl PendingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, kind: BracketKind) {
        self.kinds.push(kind);
    }

    /// Remove and return the most recently opened kind.
    #[inline]
    pub fn pop(&mut self) -> Option<BracketKind> {
        self.kinds.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// =============================================================================
// REJECTION REASONS
// =============================================================================

/// Why a scan returned `Invalid`. Only surfaced through debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    TooLong { len: usize, max_len: usize },
    OddLength { len: usize },
    UnknownChar { offset: usize, ch: char },
    UnmatchedClose { offset: usize, kind: BracketKind },
    Mismatched {
        offset: usize,
        open: BracketKind,
        close: BracketKind,
    },
    Unclosed { pending: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooLong { len, max_len } => {
                write!(f, "input length {} exceeds maximum {}", len, max_len)
            }
            Rejection::OddLength { len } => write!(f, "odd length {}", len),
            Rejection::UnknownChar { offset, ch } => {
                write!(f, "unrecognized character {:?} at byte {}", ch, offset)
            }
            Rejection::UnmatchedClose { offset, kind } => write!(
                f,
                "closing {:?} at byte {} with nothing open",
                kind.close_char(),
                offset
            ),
            Rejection::Mismatched {
                offset,
                open,
                close,
            } => write!(
                f,
                "closing {:?} at byte {} does not match open {:?}",
                close.close_char(),
                offset,
                open.open_char()
            ),
            Rejection::Unclosed { pending } => write!(f, "{} bracket(s) left open", pending),
        }
    }
}

// =============================================================================
// VALIDATOR
// =============================================================================

/// Validates nested bracket strings under a [`ValidatorConfig`].
///
/// Stateless between calls; share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Decide whether `input` is a properly nested bracket string.
    pub fn validate(&self, input: &str) -> Verdict {
        match self.check(input) {
            Ok(()) => Verdict::Valid,
            Err(rejection) => {
                debug!(len = input.len(), %rejection, "rejected input");
                Verdict::Invalid
            }
        }
    }

    /// The scan itself. `Err` carries the first reason the input failed.
    pub(crate) fn check(&self, input: &str) -> Result<(), Rejection> {
        let bytes = input.as_bytes();
        let len = bytes.len();

        if len > self.config.max_len {
            return Err(Rejection::TooLong {
                len,
                max_len: self.config.max_len,
            });
        }
        if len % 2 == 1 {
            return Err(Rejection::OddLength { len });
        }

        let mut pending = PendingStack::with_capacity(len / 2);
        let result = scan(input, &mut pending);

        contracts::check_verdict_consistent(len, pending.len(), result.is_ok());
        result
    }
}

fn scan(input: &str, pending: &mut PendingStack) -> Result<(), Rejection> {
    for (offset, &byte) in input.as_bytes().iter().enumerate() {
        let Some(Bracket { kind, role }) = Bracket::classify_byte(byte) else {
            // Everything before `offset` was ASCII, so it is a char boundary.
            let ch = input[offset..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Rejection::UnknownChar { offset, ch });
        };

        match role {
            BracketRole::Open => pending.push(kind),
            BracketRole::Closed => match pending.pop() {
                None => return Err(Rejection::UnmatchedClose { offset, kind }),
                Some(open) if open != kind => {
                    return Err(Rejection::Mismatched {
                        offset,
                        open,
                        close: kind,
                    })
                }
                Some(_) => {}
            },
        }

        contracts::check_pending_bounded(pending.len(), offset + 1);
    }

    if pending.is_empty() {
        Ok(())
    } else {
        Err(Rejection::Unclosed {
            pending: pending.len(),
        })
    }
}

/// Validate with the default configuration.
pub fn validate(input: &str) -> Verdict {
    Validator::default().validate(input)
}

/// Boolean shorthand for [`validate`].
pub fn is_nested(input: &str) -> bool {
    validate(input).is_valid()
}
