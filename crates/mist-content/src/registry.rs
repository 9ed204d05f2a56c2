//! # Target Registry
//!
//! A fixed, ordered list of targets: one per (game, content-type) pair
//! that needs a compiled schema artifact. Each target resolves
//! deterministically to one artifact path and one example-document
//! directory, both derived from the game folder and the target name
//! relative to a caller-supplied content root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mist_schema::Schema;
use thiserror::Error;

use crate::legend_in_the_mist;

/// A game line that content can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    /// Display name, e.g. "Legend in the Mist".
    pub name: &'static str,
    /// Folder slug used in artifact and example paths.
    pub folder: &'static str,
    /// Short abbreviation, e.g. "litm".
    pub abbr: &'static str,
}

/// Legend in the Mist.
pub const LEGEND_IN_THE_MIST: Game = Game {
    name: "Legend in the Mist",
    folder: "legend-in-the-mist",
    abbr: "litm",
};

/// City of Mist.
pub const CITY_OF_MIST: Game = Game {
    name: "City of Mist",
    folder: "city-of-mist",
    abbr: "com",
};

/// :Otherscape.
pub const OTHERSCAPE: Game = Game {
    name: ":Otherscape",
    folder: "otherscape",
    abbr: "otherscape",
};

/// One (game, content-type) pair requiring a schema.
#[derive(Debug, Clone)]
pub struct Target {
    /// The game line this content belongs to.
    pub game: Game,
    /// Content-type name, e.g. "challenge".
    pub name: &'static str,
    /// The structured schema definition for this content type.
    pub definition: Schema,
}

impl Target {
    /// Construct a target.
    pub fn new(game: Game, name: &'static str, definition: Schema) -> Self {
        Self {
            game,
            name,
            definition,
        }
    }

    /// Stable identifier: `<game-folder>/<name>`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.game.folder, self.name)
    }

    /// Where the compiled artifact lives:
    /// `<root>/schemas/<game-folder>/<name>.schema.json`.
    pub fn artifact_path(&self, root: &Path) -> PathBuf {
        root.join("schemas")
            .join(self.game.folder)
            .join(format!("{}.schema.json", self.name))
    }

    /// Where example documents live:
    /// `<root>/examples/<game-folder>/<name>/`.
    pub fn examples_dir(&self, root: &Path) -> PathBuf {
        root.join("examples").join(self.game.folder).join(self.name)
    }
}

/// Error constructing a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two targets share the same (game folder, content-type name) pair,
    /// which would make artifact and example paths ambiguous.
    #[error("duplicate target: {0}")]
    DuplicateTarget(String),
}

/// A fixed, ordered list of unique targets.
#[derive(Debug, Clone)]
pub struct Registry {
    targets: Vec<Target>,
}

impl Registry {
    /// Build a registry, rejecting duplicate (game folder, name) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTarget`] naming the repeated pair.
    pub fn new(targets: Vec<Target>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert((target.game.folder, target.name)) {
                return Err(RegistryError::DuplicateTarget(target.id()));
            }
        }
        Ok(Self { targets })
    }

    /// The shipped target list.
    ///
    /// Currently one target: the Legend in the Mist Challenge. The list is
    /// unique by construction; a test re-checks it through [`Registry::new`].
    pub fn builtin() -> Self {
        Self {
            targets: builtin_targets(),
        }
    }

    /// Targets in registry order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry has no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

fn builtin_targets() -> Vec<Target> {
    vec![Target::new(
        LEGEND_IN_THE_MIST,
        "challenge",
        legend_in_the_mist::challenge::challenge_schema(),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_unique_and_non_empty() {
        let registry = Registry::builtin();
        assert!(!registry.is_empty());
        // The builtin constructor bypasses the duplicate check; re-run it.
        Registry::new(builtin_targets()).unwrap();
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let targets = vec![
            Target::new(
                LEGEND_IN_THE_MIST,
                "challenge",
                legend_in_the_mist::challenge::challenge_schema(),
            ),
            Target::new(
                LEGEND_IN_THE_MIST,
                "challenge",
                legend_in_the_mist::challenge::challenge_schema(),
            ),
        ];
        let err = Registry::new(targets).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateTarget("legend-in-the-mist/challenge".to_string())
        );
    }

    #[test]
    fn same_name_under_different_games_is_allowed() {
        let targets = vec![
            Target::new(
                LEGEND_IN_THE_MIST,
                "challenge",
                legend_in_the_mist::challenge::challenge_schema(),
            ),
            Target::new(
                CITY_OF_MIST,
                "challenge",
                legend_in_the_mist::challenge::challenge_schema(),
            ),
        ];
        assert_eq!(Registry::new(targets).unwrap().len(), 2);
    }

    #[test]
    fn paths_derive_from_game_folder_and_name() {
        let registry = Registry::builtin();
        let target = &registry.targets()[0];
        let root = Path::new("/content");

        assert_eq!(
            target.artifact_path(root),
            Path::new("/content/schemas/legend-in-the-mist/challenge.schema.json")
        );
        assert_eq!(
            target.examples_dir(root),
            Path::new("/content/examples/legend-in-the-mist/challenge")
        );
        assert_eq!(target.id(), "legend-in-the-mist/challenge");
    }

    #[test]
    fn game_constants_match_the_published_lines() {
        assert_eq!(LEGEND_IN_THE_MIST.abbr, "litm");
        assert_eq!(CITY_OF_MIST.folder, "city-of-mist");
        assert_eq!(OTHERSCAPE.name, ":Otherscape");
    }
}
