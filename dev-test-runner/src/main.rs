//! Golden-file check: every `fixtures/<name>.json` is converted for each
//! target and compared with `fixtures/<name>.expected.<ext>` when present.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use polystruct::{Polystruct, SchemaDocument, Target};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn expected_path(schema_path: &Path, target: Target) -> PathBuf {
    let stem = schema_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    let ext = target.file_name().trim_start_matches("struct.");
    schema_path.with_file_name(format!("{stem}.expected.{ext}"))
}

/// Returns (checked, failed).
fn check_fixture(schema_path: &Path) -> Result<(usize, usize)> {
    let source = std::fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read {}", schema_path.display()))?;
    let schema = SchemaDocument::from_json_str(&source)
        .with_context(|| format!("invalid fixture {}", schema_path.display()))?;
    let engine = Polystruct::new(schema);

    let mut checked = 0;
    let mut failed = 0;
    for (target, result) in engine.convert_all(&Target::ALL) {
        let expected_path = expected_path(schema_path, target);
        if !expected_path.exists() {
            continue;
        }
        checked += 1;
        let expected = std::fs::read_to_string(&expected_path)?;
        let label = expected_path.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        match result {
            Ok(conversion) if conversion.text == expected => {
                eprintln!("{} {label}", "✅ pass".green());
            }
            Ok(conversion) => {
                failed += 1;
                eprintln!("{} {label}", "❌ mismatch".red());
                eprintln!("—— expected ——\n{expected}—— actual ——\n{}", conversion.text);
            }
            Err(error) => {
                failed += 1;
                eprintln!("{} {label}: {error}", "❌ failed".red());
            }
        }
    }
    Ok((checked, failed))
}

fn run() -> Result<bool> {
    let pattern = format!("{}/*.json", fixtures_dir().display());
    let mut checked = 0;
    let mut failed = 0;
    for entry in glob::glob(&pattern)? {
        let (c, f) = check_fixture(&entry?)?;
        checked += c;
        failed += f;
    }
    eprintln!("{checked} checked, {failed} failed");
    Ok(failed == 0)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
