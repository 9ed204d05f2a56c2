//! # mist-cli — Content Toolchain CLI
//!
//! Provides the `mist` command-line interface over the schema pipeline.
//!
//! ## Subcommands
//!
//! - `mist gen` — Compile every registry target into its JSON Schema
//!   draft-7 artifact under `schemas/`.
//! - `mist check` — Validate every example document under `examples/`
//!   against its target's compiled artifact and report the full failure
//!   set.
//! - `mist validate --schema <artifact> <files...>` — Validate specific
//!   files against one fixed artifact, independent of the registry.
//!
//! All commands operate relative to a content root containing `schemas/`
//! and `examples/`, resolved from `--root` or by walking up from the
//! current directory.

pub mod check;
pub mod gen;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve the content root: an explicit `--root` wins; otherwise walk up
/// from the current directory looking for a `schemas/` directory, falling
/// back to the current directory itself.
pub fn resolve_content_root(flag: Option<PathBuf>) -> PathBuf {
    if let Some(root) = flag {
        return root;
    }
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return PathBuf::from("."),
    };
    let mut dir = cwd.as_path();
    loop {
        if dir.join("schemas").is_dir() {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return cwd,
        }
    }
}

/// Resolve a path that may be relative to the content root.
///
/// Absolute paths pass through unchanged. A relative path that exists
/// under the content root resolves there; otherwise it stays relative to
/// the current directory.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let under_root = root.join(path);
    if under_root.exists() {
        under_root
    } else {
        path.to_path_buf()
    }
}
