//! Custom cargo commands for nestcheck.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask fixtures  - Regenerate data/fixtures/generated.json
//!   cargo xtask fuzz <t>  - Run one fuzz target for a minute
//!   cargo xtask kani      - Run the Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["validate_bytes", "bracket_strings", "fixture_json"];

/// Relative path of the checked-in generated fixture file
const GENERATED_FIXTURES: &str = "data/fixtures/generated.json";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fixtures") => fixtures()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (tests, clippy, fixtures, Kani)
  test            Run all Rust tests
  check           Quick check (cargo test + clippy)
  bench           Run benchmarks
  fixtures        Regenerate {GENERATED_FIXTURES}
  fuzz <target>   Run a fuzz target for 60s ({})
  kani            Run Kani proofs (skipped if cargo-kani is missing)
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("nestcheck Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contracts present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Verifying fixture files...");
    verify_fixture_files()?;
    println!("✓ Fixtures agree with the validator\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Regenerate the checked-in fixture file with the default seed.
fn fixtures() -> Result<()> {
    let root = project_root()?;
    let output = root.join(GENERATED_FIXTURES);
    let output = output
        .to_str()
        .context("fixture path is not valid UTF-8")?
        .to_owned();
    run_cargo(&[
        "run",
        "--quiet",
        "--release",
        "--",
        "generate",
        "-o",
        &output,
    ])?;
    println!("✓ Wrote {}", GENERATED_FIXTURES);
    Ok(())
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target, expected one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");

    let probe = Command::new("cargo").args(["kani", "--version"]).output();
    if !matches!(probe, Ok(ref out) if out.status.success()) {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every fixture file under data/fixtures must verify cleanly.
fn verify_fixture_files() -> Result<()> {
    let root = project_root()?;
    let dir = root.join("data/fixtures");

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("no fixture files in {}", dir.display());
    }

    let mut args = vec!["run".to_owned(), "--quiet".to_owned(), "--".to_owned(), "verify".to_owned()];
    for file in &files {
        args.push(file.to_str().context("fixture path is not valid UTF-8")?.to_owned());
    }
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_cargo(&args)
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("debug_assert").count();
    if count < 3 {
        bail!(
            "Expected at least 3 debug_assert contracts in src/contracts.rs, found {}",
            count
        );
    }

    // The Kani copy of the classifier must list the same six bytes.
    let proofs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;
    for byte in ["b'('", "b')'", "b'['", "b']'", "b'{'", "b'}'"] {
        if !proofs.contains(&format!("{} =>", byte)) {
            bail!("kani-proofs classify is missing {}", byte);
        }
    }

    Ok(())
}
