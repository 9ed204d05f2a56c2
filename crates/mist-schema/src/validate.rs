//! # Validator Factory
//!
//! Compiles a JSON Schema draft-7 artifact into a reusable
//! [`DocumentValidator`] and checks generic documents against it.
//!
//! Validation reports completeness over short-circuiting: a single pass
//! collects every violation in the document, each with a JSON-pointer
//! path into the instance, the schema location that triggered it, and a
//! human-readable message. Unknown/additional properties are tolerated:
//! artifacts compiled by this crate leave `additionalProperties` open so
//! content authors can attach auxiliary fields.

use std::fmt;

use serde_json::Value;

use crate::error::ValidatorError;

/// A single schema violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON-pointer path to the violating location in the document.
    pub instance_path: String,
    /// JSON-pointer path within the schema that triggered the violation.
    pub schema_path: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Non-empty, ordered collection of violations from one validation pass.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false for a value produced by [`DocumentValidator::validate`];
    /// present for completeness.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in reporting order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume self and return the inner list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled draft-7 validator for one schema artifact.
///
/// Build one per target; validators are cheap to reuse across every
/// document of that target.
pub struct DocumentValidator {
    validator: jsonschema::Validator,
}

impl fmt::Debug for DocumentValidator {
    // jsonschema::Validator is not Debug.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentValidator").finish_non_exhaustive()
    }
}

impl DocumentValidator {
    /// Compile a schema artifact into a validator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Build`] when the artifact is not a valid
    /// draft-7 schema.
    pub fn new(artifact: &Value) -> Result<Self, ValidatorError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft7);
        let validator = opts.build(artifact).map_err(|e| ValidatorError::Build {
            reason: e.to_string(),
        })?;
        Ok(Self { validator })
    }

    /// Validate a document, collecting every violation in one pass.
    ///
    /// Returns `Ok(())` for a conforming document, or the full ordered
    /// violation list otherwise.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationViolations> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations { violations })
        }
    }

    /// Boolean convenience wrapper around [`Self::validate`].
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
