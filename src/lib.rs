//! Linear-time validation of nested bracket strings.
//!
//! A string over `()[]{}` is properly nested when it is empty, when it is
//! `(U)`, `[U]` or `{U}` for a properly nested `U`, or when it is the
//! concatenation `UV` of two properly nested strings. Anything else, including
//! any character outside the six brackets, is invalid.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│ validate.rs  │────▶│  fixtures/      │
//! │ (Bracket,   │     │ (Validator,  │     │ (Fixture, file  │
//! │  Verdict)   │     │ PendingStack)│     │ I/O, generator) │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────────┐
//! │            contracts.rs             │
//! │ (table assertions, scan invariants) │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use nestcheck::{validate, Verdict};
//!
//! assert_eq!(validate("{[()()]}"), Verdict::Valid);
//! assert_eq!(validate("([)()]"), Verdict::Invalid);
//! assert_eq!(validate("").exit_code(), 0);
//! ```

pub mod contracts;
pub mod error;
pub mod fixtures;
pub mod testing;
mod types;
mod validate;

pub use error::{Error, Result};
pub use fixtures::generate::{
    build_string, generate, reflect, sort_brackets, substitute, truncate, GeneratorConfig,
};
pub use fixtures::{
    verify_fixtures, Fixture, FixtureFailure, FixtureFile, Provenance, VerificationReport,
};
pub use types::{Bracket, BracketKind, BracketRole, Verdict};
pub use validate::{
    is_nested, validate, PendingStack, Validator, ValidatorConfig, DEFAULT_MAX_LEN,
};
