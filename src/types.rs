// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The alphabet of the nesting grammar and the shape of its answer.
//!
//! Six characters matter: `(` `)` `[` `]` `{` `}`. Each one has a kind (which
//! pair it belongs to) and a role (whether it opens or closes). Both are read
//! from one fixed 128-entry ASCII table built at compile time, so classifying a
//! character is a bounds check and an index.
//!
//! | Char | Kind     | Role     |
//! |------|----------|----------|
//! | `(`  | `Round`  | `Open`   |
//! | `)`  | `Round`  | `Closed` |
//! | `[`  | `Square` | `Open`   |
//! | `]`  | `Square` | `Closed` |
//! | `{`  | `Curly`  | `Open`   |
//! | `}`  | `Curly`  | `Closed` |
//!
//! Everything else, including every non-ASCII scalar, is unknown and makes a
//! string invalid wherever it appears.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// BRACKET KIND
// =============================================================================

/// Which of the three bracket shapes a character belongs to.
///
/// The UNKNOWN case is represented by `None` from [`BracketKind::from_char`]
/// rather than a fourth variant, so a `BracketKind` value is always a real pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Round,
    Square,
    Curly,
}

impl BracketKind {
    /// All kinds, in table order.
    pub const ALL: [BracketKind; 3] = [BracketKind::Round, BracketKind::Square, BracketKind::Curly];

    /// The opening character for this kind.
    #[inline]
    pub const fn open_char(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    /// The closing character for this kind.
    #[inline]
    pub const fn close_char(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }

    /// Look up the kind of a character. `None` for anything outside the six brackets.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        Bracket::classify(c).map(|b| b.kind)
    }
}

// =============================================================================
// BRACKET ROLE
// =============================================================================

/// Whether a bracket character opens or closes a group. Independent of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketRole {
    Open,
    Closed,
}

impl BracketRole {
    /// Look up the role of a character. `None` for anything outside the six brackets.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        Bracket::classify(c).map(|b| b.role)
    }

    /// The opposite role. Used when reflecting a string.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            BracketRole::Open => BracketRole::Closed,
            BracketRole::Closed => BracketRole::Open,
        }
    }
}

// =============================================================================
// CLASSIFIED BRACKET
// =============================================================================

/// A recognized bracket character: its kind and role together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket {
    pub kind: BracketKind,
    pub role: BracketRole,
}

/// Byte-indexed classification table. Only ASCII bytes can be brackets.
pub(crate) const BRACKET_TABLE: [Option<Bracket>; 128] = build_table();

const fn build_table() -> [Option<Bracket>; 128] {
    let mut table: [Option<Bracket>; 128] = [None; 128];
    let mut i = 0;
    while i < BracketKind::ALL.len() {
        let kind = BracketKind::ALL[i];
        table[kind.open_char() as usize] = Some(Bracket {
            kind,
            role: BracketRole::Open,
        });
        table[kind.close_char() as usize] = Some(Bracket {
            kind,
            role: BracketRole::Closed,
        });
        i += 1;
    }
    table
}

impl Bracket {
    /// Classify a single byte. Bytes >= 0x80 (UTF-8 lead and continuation bytes)
    /// are never brackets.
    #[inline]
    pub fn classify_byte(byte: u8) -> Option<Self> {
        BRACKET_TABLE.get(byte as usize).copied().flatten()
    }

    /// Classify a character.
    #[inline]
    pub fn classify(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::classify_byte(c as u8)
        } else {
            None
        }
    }

    /// The character this bracket stands for.
    #[inline]
    pub const fn to_char(self) -> char {
        match self.role {
            BracketRole::Open => self.kind.open_char(),
            BracketRole::Closed => self.kind.close_char(),
        }
    }
}

// =============================================================================
// VERDICT
// =============================================================================

/// The outcome of a validation call.
///
/// `Invalid` is an ordinary answer, not an error. Callers that want an
/// exit-code-like ordinal use [`Verdict::exit_code`]: 0 for valid, 1 for invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Ordinal form: 0 for `Valid`, 1 for `Invalid`.
    #[inline]
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Valid => 0,
            Verdict::Invalid => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::Invalid => "INVALID",
        }
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_valid()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
