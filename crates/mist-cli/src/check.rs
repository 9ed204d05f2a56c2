//! # Check Subcommand
//!
//! The batch validation driver. For every registry target, in registry
//! order: resolve the compiled artifact and the example directory, build
//! one validator per target, and validate every qualifying file in the
//! directory (flat listing, files only, JSON/TOML extensions only).
//!
//! A missing artifact or a missing/empty example directory is a warning
//! and skips that target, allowing partial schema coverage during
//! development. Per-file load errors are caught and recorded as failures
//! so a single run reports the complete failure set; the run never aborts
//! early. The exit code is 1 iff at least one file failed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use mist_content::Registry;
use mist_schema::{is_data_file, load_document, DocumentValidator, ValidationViolations};

/// Per-file validation outcome.
#[derive(Debug)]
pub enum Outcome {
    /// The document conforms to its target's schema.
    Pass,
    /// The file could not be loaded (unsupported type, unreadable, or
    /// malformed syntax).
    LoadFailed(String),
    /// The document was loaded but violates the schema.
    Invalid(ValidationViolations),
}

/// Validation result for one example file.
#[derive(Debug)]
pub struct FileResult {
    /// The file that was processed.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: Outcome,
}

impl FileResult {
    /// Whether the file passed validation.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass)
    }
}

/// Aggregated results of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per processed file, in processing order.
    pub results: Vec<FileResult>,
    /// Target ids that were skipped (missing artifact or no examples).
    pub skipped: Vec<String>,
}

impl BatchReport {
    /// Number of files that failed, for any reason.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }
}

/// Execute the check subcommand. Returns the process exit code:
/// 0 when every processed file passed, 1 otherwise.
pub fn run_check(registry: &Registry, root: &Path) -> Result<u8> {
    let report = check_registry(registry, root)?;

    let failures = report.failures();
    if failures > 0 {
        println!("\n{failures} file(s) failed validation.");
        Ok(1)
    } else {
        println!("\nAll example files passed validation.");
        Ok(0)
    }
}

/// Run the batch driver over every registry target, printing one line per
/// processed file and one warning per skipped target.
pub fn check_registry(registry: &Registry, root: &Path) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for target in registry.targets() {
        let artifact_path = target.artifact_path(root);
        if !artifact_path.is_file() {
            println!(
                "WARN: missing schema for target {}: {} (skipping)",
                target.id(),
                artifact_path.display()
            );
            report.skipped.push(target.id());
            continue;
        }

        let text = std::fs::read_to_string(&artifact_path)
            .with_context(|| format!("cannot read schema artifact {}", artifact_path.display()))?;
        let artifact: Value = serde_json::from_str(&text)
            .with_context(|| format!("invalid schema artifact {}", artifact_path.display()))?;
        // One validator per target; validators are not shared across
        // targets even when definitions coincide.
        let validator = DocumentValidator::new(&artifact)
            .with_context(|| format!("cannot compile validator for target {}", target.id()))?;

        let examples_dir = target.examples_dir(root);
        let files = list_example_files(&examples_dir)
            .with_context(|| format!("cannot list example directory {}", examples_dir.display()))?;
        if files.is_empty() {
            println!(
                "WARN: no example files found in {} (skipping)",
                examples_dir.display()
            );
            report.skipped.push(target.id());
            continue;
        }

        for file in files {
            let result = check_file(&validator, &file);
            match &result.outcome {
                Outcome::Pass => println!("OK: {}", result.path.display()),
                Outcome::LoadFailed(reason) => {
                    println!("FAIL: {}: {}", result.path.display(), reason);
                }
                Outcome::Invalid(violations) => {
                    println!("FAIL: {}", result.path.display());
                    println!("{violations}");
                }
            }
            report.results.push(result);
        }
    }

    Ok(report)
}

/// Load and validate a single example file. Load errors are captured in
/// the outcome rather than propagated, so the batch continues.
fn check_file(validator: &DocumentValidator, path: &Path) -> FileResult {
    let outcome = match load_document(path) {
        Err(e) => Outcome::LoadFailed(e.to_string()),
        Ok(document) => match validator.validate(&document) {
            Ok(()) => Outcome::Pass,
            Err(violations) => Outcome::Invalid(violations),
        },
    };
    FileResult {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Flat, non-recursive listing of qualifying example files: regular files
/// with a JSON or TOML extension. A missing directory yields an empty
/// list. No ordering is imposed beyond the directory's own enumeration.
fn list_example_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_data_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}
