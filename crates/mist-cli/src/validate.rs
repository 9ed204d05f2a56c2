//! # Validate Subcommand
//!
//! Validates an arbitrary list of files against one fixed schema
//! artifact, independent of the registry. Unlike the batch driver, this
//! entry point has no recovery path: an unsupported file type or an
//! unreadable file aborts the run immediately.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use mist_schema::{load_document, DocumentValidator};

/// Arguments for the `mist validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema artifact to validate against. Defaults to the Legend in the
    /// Mist challenge schema under the content root.
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Content files (.json or .toml) to validate.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the validate subcommand. Returns the process exit code:
/// 0 when every file passed, 1 when at least one failed.
pub fn run_validate(args: &ValidateArgs, root: &Path) -> Result<u8> {
    let schema_path = args.schema.clone().unwrap_or_else(|| {
        root.join("schemas")
            .join("legend-in-the-mist")
            .join("challenge.schema.json")
    });

    let text = std::fs::read_to_string(&schema_path)
        .with_context(|| format!("cannot read schema artifact {}", schema_path.display()))?;
    let artifact: Value = serde_json::from_str(&text)
        .with_context(|| format!("invalid schema artifact {}", schema_path.display()))?;
    let validator = DocumentValidator::new(&artifact)
        .with_context(|| format!("cannot compile validator from {}", schema_path.display()))?;

    let mut failed = false;
    for file in &args.files {
        let path = crate::resolve_path(file, root);
        // Load errors abort the run: this entry point processes exactly
        // the files it was given or stops.
        let document = load_document(&path)?;
        match validator.validate(&document) {
            Ok(()) => println!("OK: {}", path.display()),
            Err(violations) => {
                failed = true;
                println!("FAIL: {}", path.display());
                println!("{violations}");
            }
        }
    }

    Ok(u8::from(failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mist_content::legend_in_the_mist::challenge::challenge_schema;
    use mist_schema::write_artifact;

    fn staged_schema(dir: &Path) -> PathBuf {
        let path = dir.join("challenge.schema.json");
        write_artifact(&challenge_schema(), &path).unwrap();
        path
    }

    fn args(schema: PathBuf, files: Vec<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            schema: Some(schema),
            files,
        }
    }

    #[test]
    fn passing_files_exit_zero() {
        let dir = tempfile::tempdir().unwrap();
        let schema = staged_schema(dir.path());
        let file = dir.path().join("boggart.json");
        std::fs::write(&file, r#"{"name": "Boggart", "rating": 2}"#).unwrap();

        let code = run_validate(&args(schema, vec![file]), dir.path()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn any_failing_file_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let schema = staged_schema(dir.path());
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"name": "Boggart", "rating": 2}"#).unwrap();
        std::fs::write(&bad, r#"{"name": "", "rating": 2}"#).unwrap();

        let code = run_validate(&args(schema, vec![good, bad]), dir.path()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn unsupported_file_type_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let schema = staged_schema(dir.path());
        let file = dir.path().join("boggart.yaml");
        std::fs::write(&file, "name: Boggart").unwrap();

        let err = run_validate(&args(schema, vec![file]), dir.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn missing_schema_artifact_is_an_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("nope.schema.json");
        let file = dir.path().join("boggart.json");
        std::fs::write(&file, r#"{"name": "Boggart", "rating": 2}"#).unwrap();

        let err = run_validate(&args(schema, vec![file]), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.schema.json"));
    }

    #[test]
    fn toml_files_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let schema = staged_schema(dir.path());
        let file = dir.path().join("commoner.toml");
        std::fs::write(&file, "name = \"Commoner\"\nrating = 1\n").unwrap();

        let code = run_validate(&args(schema, vec![file]), dir.path()).unwrap();
        assert_eq!(code, 0);
    }
}
