//! # Gen Subcommand
//!
//! Compiles every registry target into its JSON Schema draft-7 artifact
//! at `schemas/<game-folder>/<name>.schema.json` under the content root.
//!
//! Generation is fail-fast: any ill-formed definition or write failure
//! aborts the whole run with a nonzero exit, because a partial schema set
//! is unsafe to trust for subsequent validation. Writes are atomic, so an
//! aborted run leaves no partial artifact behind.

use std::path::Path;

use anyhow::{Context, Result};

use mist_content::Registry;
use mist_schema::write_artifact;

/// Execute the gen subcommand. Returns the process exit code.
pub fn run_gen(registry: &Registry, root: &Path) -> Result<u8> {
    for target in registry.targets() {
        let path = target.artifact_path(root);
        write_artifact(&target.definition, &path)
            .with_context(|| format!("failed to compile schema for target {}", target.id()))?;
        println!("Wrote {}", path.display());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn generates_artifact_for_every_builtin_target() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::builtin();

        let code = run_gen(&registry, dir.path()).unwrap();
        assert_eq!(code, 0);

        for target in registry.targets() {
            let path = target.artifact_path(dir.path());
            assert!(path.is_file(), "missing artifact for {}", target.id());

            let text = std::fs::read_to_string(&path).unwrap();
            let value: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["$schema"], "http://json-schema.org/draft-07/schema#");
        }
    }

    #[test]
    fn regeneration_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::builtin();
        let path = registry.targets()[0].artifact_path(dir.path());

        run_gen(&registry, dir.path()).unwrap();
        std::fs::write(&path, "stale").unwrap();
        run_gen(&registry, dir.path()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_ne!(text, "stale");
    }
}
