//! Custom cargo commands for the kata crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["binary_search", "pair_sum"];

/// Seconds each fuzz target runs for in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

/// Functions in src/search.rs that kani-proofs carries a copy of.
const PROVED_FUNCTIONS: &[&str] = &["midpoint", "search_position"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
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
  verify    Run full verification suite (tests + clippy + proof copy drift)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("kata Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/3] Checking Kani copies match src/...");
    verify_proof_copies()?;
    println!("✓ Proof copies aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No crashes found");
    Ok(())
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&dir)
        .status()
        .context("Failed to run cargo kani (is it installed?)")?;

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
        Err(_) => env::current_dir().context("Failed to read current directory")?,
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

/// The Kani crate proves a copy of the search code. Fail if the copy's
/// function bodies drift from src/search.rs.
fn verify_proof_copies() -> Result<()> {
    let root = project_root()?;

    let search_rs = std::fs::read_to_string(root.join("src/search.rs"))
        .context("Failed to read src/search.rs")?;
    let proofs_rs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in PROVED_FUNCTIONS {
        let original = fn_body(&search_rs, name)
            .with_context(|| format!("fn {} not found in src/search.rs", name))?;
        let copy = fn_body(&proofs_rs, name)
            .with_context(|| format!("fn {} not found in kani-proofs", name))?;

        if normalize(&original) != normalize(&copy) {
            bail!("kani-proofs copy of `{}` differs from src/search.rs", name);
        }
    }

    Ok(())
}

/// Signature and body of `fn <name>`, from the `fn` keyword to the closing brace.
fn fn_body(source: &str, name: &str) -> Option<String> {
    let needle = format!("fn {}", name);
    let start = source.match_indices(&needle).map(|(i, _)| i).find(|&i| {
        source[i + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '(' || c == '<')
    })?;

    let mut depth = 0usize;
    for (offset, c) in source[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(source[start..=start + offset].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Drop line comments and all whitespace.
fn normalize(code: &str) -> String {
    code.lines()
        .map(|line| line.split("//").next().unwrap_or(""))
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect()
}
