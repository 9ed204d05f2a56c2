//! # Error Taxonomy
//!
//! Structured error types for the schema pipeline, built with `thiserror`.
//!
//! Each stage of the pipeline has its own error type: [`DefinitionError`]
//! for ill-formed schema definitions, [`CompileError`] for artifact
//! generation, [`DocumentError`] for content file loading, and
//! [`ValidatorError`] for validator construction. Every variant carries
//! the definition location or file path it relates to; silent failures
//! are disallowed.

use thiserror::Error;

/// An internally inconsistent schema definition.
///
/// Definitions are checked before compilation; any of these errors is
/// fatal and no artifact is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A string length range with `min > max`.
    #[error("invalid length range at '{location}': min {min} > max {max}")]
    InvalidLengthRange {
        /// Pointer-style location of the offending node within the definition.
        location: String,
        /// Declared minimum length.
        min: u64,
        /// Declared maximum length.
        max: u64,
    },

    /// A numeric range with `min > max`.
    #[error("invalid numeric range at '{location}': min {min} > max {max}")]
    InvalidNumericRange {
        /// Pointer-style location of the offending node.
        location: String,
        /// Declared minimum.
        min: i64,
        /// Declared maximum.
        max: i64,
    },

    /// An enumeration with no variants.
    #[error("enum at '{location}' has no variants")]
    EmptyEnum {
        /// Pointer-style location of the offending node.
        location: String,
    },

    /// A declared default value that violates the node's own constraints.
    #[error("default value at '{location}' violates its own constraints: {reason}")]
    InvalidDefault {
        /// Pointer-style location of the offending node.
        location: String,
        /// Which constraint the default fails.
        reason: String,
    },

    /// Two fields of the same object share a name.
    #[error("duplicate field '{name}' in object at '{location}'")]
    DuplicateField {
        /// Pointer-style location of the object node.
        location: String,
        /// The repeated field name.
        name: String,
    },
}

/// Error while compiling a definition into an artifact on disk.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The definition failed its well-formedness check.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// The compiled schema could not be serialized to JSON text.
    #[error("failed to serialize schema artifact: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem failure while writing the artifact.
    #[error("failed to write artifact '{path}': {source}")]
    Io {
        /// Destination artifact path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Error while loading a content file into a generic document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// The offending path.
        path: String,
    },

    /// The file could not be read from disk.
    #[error("cannot read file '{path}': {reason}")]
    Read {
        /// The offending path.
        path: String,
        /// Underlying I/O message.
        reason: String,
    },

    /// The file content is not syntactically valid JSON/TOML.
    #[error("malformed {format} in '{path}': {reason}")]
    Parse {
        /// The offending path.
        path: String,
        /// `"JSON"` or `"TOML"`.
        format: &'static str,
        /// The parser's own message.
        reason: String,
    },
}

/// Error while compiling a schema artifact into a validator.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The artifact is not a valid draft-7 schema.
    #[error("invalid schema artifact: {reason}")]
    Build {
        /// The underlying compilation message.
        reason: String,
    },
}
