//! # mist-schema — Schema Definitions, Compilation, and Validation
//!
//! The engine behind the content toolchain: declarative schema definitions
//! expressed as plain data, a compiler that turns them into portable JSON
//! Schema draft-7 artifacts, a loader that parses JSON/TOML content files
//! into a generic document tree, and a validator factory that checks
//! documents against compiled artifacts and reports every violation.
//!
//! ## Pipeline
//!
//! ```text
//! Schema (def) ──compile──▶ draft-7 artifact ──▶ DocumentValidator
//!                                                      ▲
//! content file (.json/.toml) ──load_document──▶ Value ─┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Schemas are data.** A [`Schema`] is a tree of structs and enums,
//!    not an opaque builder API. It can be inspected, compared, and
//!    serialized independently of the compiler.
//!
//! 2. **Validation reports everything.** [`DocumentValidator::validate`]
//!    collects all violations in a single pass rather than stopping at
//!    the first, so one run surfaces every problem in a document.
//!
//! 3. **Structured errors with `thiserror`.** Every failure names the
//!    file or definition location it relates to. No `unwrap()` outside
//!    tests.

pub mod compile;
pub mod def;
pub mod document;
pub mod error;
pub mod validate;

pub use compile::{compile, render, write_artifact};
pub use def::{
    ArraySpec, BoolSpec, EnumSpec, Field, IntegerSpec, Kind, ObjectSpec, Schema, StringSpec,
};
pub use document::{is_data_file, load_document};
pub use error::{CompileError, DefinitionError, DocumentError, ValidatorError};
pub use validate::{DocumentValidator, ValidationViolations, Violation};
