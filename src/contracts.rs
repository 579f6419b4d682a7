//! Runtime and compile-time contracts for the nesting scan.
//!
//! The runtime checks are `debug_assert!`s: free in release builds, loud in
//! tests and debug runs. The compile-time block below fails the build if the
//! classification table ever stops being a total, one-to-one map over the six
//! bracket characters.
//!
//! | Contract                      | Property                                        |
//! |-------------------------------|-------------------------------------------------|
//! | table assertions (const)      | six entries, one kind and one role per char     |
//! | `check_pending_bounded`       | pending opens never exceed bytes consumed       |
//! | `check_verdict_consistent`    | valid ⇒ even length and empty stack             |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)

use crate::types::{BracketKind, BracketRole, BRACKET_TABLE};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    let mut recognized = 0;
    let mut opens = 0;
    let mut byte = 0;
    while byte < BRACKET_TABLE.len() {
        if let Some(bracket) = BRACKET_TABLE[byte] {
            recognized += 1;
            if matches!(bracket.role, BracketRole::Open) {
                opens += 1;
            }
        }
        byte += 1;
    }
    // Exactly six characters, three of each role.
    assert!(recognized == 6);
    assert!(opens == 3);

    // Each kind's open and close land on entries of that kind with the right role.
    let mut i = 0;
    while i < BracketKind::ALL.len() {
        let kind = BracketKind::ALL[i];
        match BRACKET_TABLE[kind.open_char() as usize] {
            Some(b) => assert!(b.kind as u8 == kind as u8 && matches!(b.role, BracketRole::Open)),
            None => panic!("open char missing from table"),
        }
        match BRACKET_TABLE[kind.close_char() as usize] {
            Some(b) => {
                assert!(b.kind as u8 == kind as u8 && matches!(b.role, BracketRole::Closed))
            }
            None => panic!("close char missing from table"),
        }
        i += 1;
    }
};

// ============================================================================
// SCAN CONTRACTS
// ============================================================================

/// Each byte pushes at most one entry, so the stack can never outgrow the
/// number of bytes consumed.
///
/// # Panics (debug builds only)
/// Panics if `pending > consumed`.
#[inline]
pub fn check_pending_bounded(pending: usize, consumed: usize) {
    debug_assert!(
        pending <= consumed,
        "Contract violation: {} pending opens after {} bytes",
        pending,
        consumed
    );
}

/// A valid verdict implies an even length and an empty stack.
///
/// # Panics (debug builds only)
/// Panics if `valid` holds while `len` is odd or `pending` is non-zero.
#[inline]
pub fn check_verdict_consistent(len: usize, pending: usize, valid: bool) {
    if valid {
        debug_assert!(
            len % 2 == 0,
            "Contract violation: odd length {} judged valid",
            len
        );
        debug_assert!(
            pending == 0,
            "Contract violation: {} pending opens in a valid string",
            pending
        );
    }
}
