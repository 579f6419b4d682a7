// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the nestcheck command-line interface.
//!
//! `nestcheck <INPUT>` (or `nestcheck check <INPUT>`) validates one string and
//! exits 0 for VALID, 1 for INVALID. `generate` writes a seeded fixture file and
//! `verify` runs the validator over fixture files.
//!
//! A string spelled like a subcommand (`check`, `generate`, `verify`) is taken
//! as that subcommand. Put it after `--` to validate it instead:
//! `nestcheck -- generate`. There is no `help` subcommand, so `nestcheck help`
//! validates the string "help".

pub mod display;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nestcheck::fixtures::generate::DEFAULT_SEED;
use nestcheck::DEFAULT_MAX_LEN;

#[derive(Parser)]
#[command(
    name = "nestcheck",
    about = "Validate nested bracket strings",
    version,
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Maximum input length in bytes; longer inputs are INVALID
    #[arg(long, global = true, env = "NESTCHECK_MAX_LEN", default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// String to validate (same as `nestcheck check <INPUT>`).
    /// Use `nestcheck -- <INPUT>` when it is a subcommand name
    #[arg(allow_hyphen_values = true)]
    pub input: Option<OsString>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one string; exit 0 if properly nested, 1 otherwise
    Check {
        /// String to validate
        #[arg(allow_hyphen_values = true)]
        input: OsString,
    },

    /// Write a seeded fixture file of valid and invalid strings
    Generate {
        /// Seed for every random choice
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Distance between generated lengths (must be even)
        #[arg(long, default_value_t = 4)]
        step: usize,

        /// Generated lengths stay below this
        #[arg(long, default_value_t = 40)]
        max_length: usize,

        /// Also emit one valid and one invalid string of this length
        #[arg(long)]
        big_length: Option<usize>,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check fixture files against the validator
    Verify {
        /// Fixture files (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
