//! # Structured Schema Definitions
//!
//! Plain-data description of a document shape: primitive fields with
//! constraints, nested objects, arrays, and enumerations, with
//! human-readable metadata (description, examples) attached to every node
//! for downstream documentation generation.
//!
//! A [`Schema`] is a value, not a builder pipeline. It can be constructed
//! literally, inspected, compared, and handed to [`crate::compile`]
//! independently of any schema-building API.
//!
//! ## Invariants
//!
//! - A required [`Field`] without a default fails validation when absent;
//!   a field whose schema declares a default is never listed as required
//!   in the compiled artifact.
//! - [`Schema::check`] verifies internal consistency (min ≤ max ranges,
//!   non-empty enums, defaults that satisfy their own constraints) before
//!   any compilation happens.

use serde_json::Value;

use crate::error::DefinitionError;

/// One node of a structured schema definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// The shape of values this node accepts.
    pub kind: Kind,
    /// Artifact title, only meaningful on a root node.
    pub title: Option<String>,
    /// Human-readable description of the node.
    pub description: Option<String>,
    /// Example values for documentation generation.
    pub examples: Vec<Value>,
    /// Whether `null` is accepted in addition to the declared kind.
    pub nullable: bool,
}

/// The shape of a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A string with optional trimming semantics and length bounds.
    String(StringSpec),
    /// An integer with an optional inclusive range.
    Integer(IntegerSpec),
    /// A boolean.
    Boolean(BoolSpec),
    /// A closed set of string values.
    Enum(EnumSpec),
    /// A homogeneous array; each element validates independently.
    Array(ArraySpec),
    /// An object with an ordered list of named fields.
    Object(ObjectSpec),
}

/// Constraints for a string node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringSpec {
    /// Whether whitespace-only content counts as empty. A trimmed string
    /// with a minimum length rejects values that contain no
    /// non-whitespace character.
    pub trim: bool,
    /// Inclusive minimum length.
    pub min_len: Option<u64>,
    /// Inclusive maximum length.
    pub max_len: Option<u64>,
    /// Value assumed when the field is absent.
    pub default: Option<String>,
}

/// Constraints for an integer node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerSpec {
    /// Inclusive minimum.
    pub min: Option<i64>,
    /// Inclusive maximum.
    pub max: Option<i64>,
    /// Value assumed when the field is absent.
    pub default: Option<i64>,
}

/// Constraints for a boolean node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoolSpec {
    /// Value assumed when the field is absent.
    pub default: Option<bool>,
}

/// A closed set of string variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumSpec {
    /// The accepted values, in declaration order.
    pub variants: Vec<String>,
    /// Value assumed when the field is absent; must be one of `variants`.
    pub default: Option<String>,
}

/// An array of homogeneous elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySpec {
    /// Schema every element must satisfy.
    pub items: Box<Schema>,
    /// Inclusive minimum element count.
    pub min_items: Option<u64>,
}

/// An object with named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    /// The object's fields. Order is preserved into the compiled artifact.
    pub fields: Vec<Field>,
}

/// A named field of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property name in the document.
    pub name: String,
    /// Schema the field's value must satisfy.
    pub schema: Schema,
    /// Whether the field must be present. A required field whose schema
    /// declares a default is satisfied by the default instead.
    pub required: bool,
}

impl Field {
    /// A field that must be present (unless its schema has a default).
    pub fn required(name: &str, schema: Schema) -> Self {
        Self {
            name: name.to_string(),
            schema,
            required: true,
        }
    }

    /// A field that may be absent.
    pub fn optional(name: &str, schema: Schema) -> Self {
        Self {
            name: name.to_string(),
            schema,
            required: false,
        }
    }
}

impl Schema {
    /// A schema node with no metadata attached.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            title: None,
            description: None,
            examples: Vec::new(),
            nullable: false,
        }
    }

    /// Attach an artifact title (root nodes only).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    /// Attach example values.
    pub fn with_examples(mut self, examples: Vec<Value>) -> Self {
        self.examples = examples;
        self
    }

    /// Accept `null` in addition to the declared kind.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The default value declared by this node, if any, as a JSON value.
    pub fn default_value(&self) -> Option<Value> {
        match &self.kind {
            Kind::String(s) => s.default.clone().map(Value::String),
            Kind::Integer(s) => s.default.map(Value::from),
            Kind::Boolean(s) => s.default.map(Value::Bool),
            Kind::Enum(s) => s.default.clone().map(Value::String),
            Kind::Array(_) | Kind::Object(_) => None,
        }
    }

    /// Verify that the definition is internally consistent.
    ///
    /// Checks, recursively: length and numeric ranges satisfy min ≤ max,
    /// enums have at least one variant and defaults drawn from their own
    /// variant list, string and integer defaults satisfy their own
    /// constraints, and objects have no duplicate field names.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] found, carrying a
    /// pointer-style location of the offending node.
    pub fn check(&self) -> Result<(), DefinitionError> {
        self.check_at("")
    }

    fn check_at(&self, location: &str) -> Result<(), DefinitionError> {
        match &self.kind {
            Kind::String(spec) => check_string(spec, location),
            Kind::Integer(spec) => check_integer(spec, location),
            Kind::Boolean(_) => Ok(()),
            Kind::Enum(spec) => check_enum(spec, location),
            Kind::Array(spec) => spec.items.check_at(&format!("{location}/items")),
            Kind::Object(spec) => {
                let mut seen = std::collections::HashSet::new();
                for field in &spec.fields {
                    if !seen.insert(field.name.as_str()) {
                        return Err(DefinitionError::DuplicateField {
                            location: if location.is_empty() {
                                "/".to_string()
                            } else {
                                location.to_string()
                            },
                            name: field.name.clone(),
                        });
                    }
                    field
                        .schema
                        .check_at(&format!("{location}/{}", field.name))?;
                }
                Ok(())
            }
        }
    }
}

fn check_string(spec: &StringSpec, location: &str) -> Result<(), DefinitionError> {
    if let (Some(min), Some(max)) = (spec.min_len, spec.max_len) {
        if min > max {
            return Err(DefinitionError::InvalidLengthRange {
                location: location.to_string(),
                min,
                max,
            });
        }
    }
    if let Some(default) = &spec.default {
        let effective = if spec.trim { default.trim() } else { default };
        let len = effective.chars().count() as u64;
        if spec.min_len.is_some_and(|min| len < min) {
            return Err(DefinitionError::InvalidDefault {
                location: location.to_string(),
                reason: format!("\"{default}\" is shorter than the minimum length"),
            });
        }
        if spec.max_len.is_some_and(|max| len > max) {
            return Err(DefinitionError::InvalidDefault {
                location: location.to_string(),
                reason: format!("\"{default}\" is longer than the maximum length"),
            });
        }
    }
    Ok(())
}

fn check_integer(spec: &IntegerSpec, location: &str) -> Result<(), DefinitionError> {
    if let (Some(min), Some(max)) = (spec.min, spec.max) {
        if min > max {
            return Err(DefinitionError::InvalidNumericRange {
                location: location.to_string(),
                min,
                max,
            });
        }
    }
    if let Some(default) = spec.default {
        if spec.min.is_some_and(|min| default < min) || spec.max.is_some_and(|max| default > max) {
            return Err(DefinitionError::InvalidDefault {
                location: location.to_string(),
                reason: format!("{default} is outside the declared range"),
            });
        }
    }
    Ok(())
}

fn check_enum(spec: &EnumSpec, location: &str) -> Result<(), DefinitionError> {
    if spec.variants.is_empty() {
        return Err(DefinitionError::EmptyEnum {
            location: location.to_string(),
        });
    }
    if let Some(default) = &spec.default {
        if !spec.variants.contains(default) {
            return Err(DefinitionError::InvalidDefault {
                location: location.to_string(),
                reason: format!("\"{default}\" is not one of the declared variants"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn string(spec: StringSpec) -> Schema {
        Schema::new(Kind::String(spec))
    }

    #[test]
    fn well_formed_object_passes_check() {
        let schema = Schema::new(Kind::Object(ObjectSpec {
            fields: vec![
                Field::required(
                    "name",
                    string(StringSpec {
                        trim: true,
                        min_len: Some(1),
                        ..Default::default()
                    }),
                ),
                Field::optional(
                    "rating",
                    Schema::new(Kind::Integer(IntegerSpec {
                        min: Some(1),
                        max: Some(5),
                        default: Some(1),
                    })),
                ),
            ],
        }));
        schema.check().unwrap();
    }

    #[test]
    fn inverted_length_range_is_rejected() {
        let schema = string(StringSpec {
            min_len: Some(10),
            max_len: Some(2),
            ..Default::default()
        });
        let err = schema.check().unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidLengthRange { .. }));
    }

    #[test]
    fn inverted_numeric_range_is_rejected_with_location() {
        let schema = Schema::new(Kind::Object(ObjectSpec {
            fields: vec![Field::required(
                "level",
                Schema::new(Kind::Integer(IntegerSpec {
                    min: Some(6),
                    max: Some(1),
                    default: None,
                })),
            )],
        }));
        let err = schema.check().unwrap_err();
        match err {
            DefinitionError::InvalidNumericRange { location, .. } => {
                assert_eq!(location, "/level");
            }
            other => panic!("expected InvalidNumericRange, got {other}"),
        }
    }

    #[test]
    fn empty_enum_is_rejected() {
        let schema = Schema::new(Kind::Enum(EnumSpec::default()));
        assert!(matches!(
            schema.check().unwrap_err(),
            DefinitionError::EmptyEnum { .. }
        ));
    }

    #[test]
    fn enum_default_outside_variants_is_rejected() {
        let schema = Schema::new(Kind::Enum(EnumSpec {
            variants: vec!["origin".to_string(), "adventure".to_string()],
            default: Some("greatness".to_string()),
        }));
        assert!(matches!(
            schema.check().unwrap_err(),
            DefinitionError::InvalidDefault { .. }
        ));
    }

    #[test]
    fn integer_default_outside_range_is_rejected() {
        let schema = Schema::new(Kind::Integer(IntegerSpec {
            min: Some(1),
            max: Some(6),
            default: Some(7),
        }));
        assert!(matches!(
            schema.check().unwrap_err(),
            DefinitionError::InvalidDefault { .. }
        ));
    }

    #[test]
    fn trimmed_default_is_measured_after_trimming() {
        let schema = string(StringSpec {
            trim: true,
            min_len: Some(1),
            default: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            schema.check().unwrap_err(),
            DefinitionError::InvalidDefault { .. }
        ));
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let schema = Schema::new(Kind::Object(ObjectSpec {
            fields: vec![
                Field::optional("name", string(StringSpec::default())),
                Field::optional("name", string(StringSpec::default())),
            ],
        }));
        match schema.check().unwrap_err() {
            DefinitionError::DuplicateField { name, .. } => assert_eq!(name, "name"),
            other => panic!("expected DuplicateField, got {other}"),
        }
    }

    #[test]
    fn array_items_are_checked_recursively() {
        let schema = Schema::new(Kind::Array(ArraySpec {
            items: Box::new(Schema::new(Kind::Integer(IntegerSpec {
                min: Some(5),
                max: Some(1),
                default: None,
            }))),
            min_items: Some(1),
        }));
        match schema.check().unwrap_err() {
            DefinitionError::InvalidNumericRange { location, .. } => {
                assert_eq!(location, "/items");
            }
            other => panic!("expected InvalidNumericRange, got {other}"),
        }
    }

    #[test]
    fn default_value_reflects_kind() {
        let s = string(StringSpec {
            default: Some("Untitled".to_string()),
            ..Default::default()
        });
        assert_eq!(s.default_value(), Some(json!("Untitled")));

        let i = Schema::new(Kind::Integer(IntegerSpec {
            default: Some(1),
            ..Default::default()
        }));
        assert_eq!(i.default_value(), Some(json!(1)));

        let none = string(StringSpec::default());
        assert_eq!(none.default_value(), None);
    }
}
