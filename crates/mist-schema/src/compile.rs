//! # Schema Compiler
//!
//! Turns a [`Schema`] definition into a portable JSON Schema draft-7
//! document and writes it to disk as a compiled artifact.
//!
//! ## Determinism
//!
//! Object properties are emitted in field declaration order and the text
//! rendering is pretty-printed with two-space indentation plus a trailing
//! newline, so compiling the same definition twice yields byte-identical
//! output.
//!
//! ## Atomicity
//!
//! [`write_artifact`] serializes into a temporary file in the destination
//! directory and renames it into place. A failed compilation or write
//! leaves no partial artifact behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::def::{Kind, ObjectSpec, Schema};
use crate::error::{CompileError, DefinitionError};

/// The draft-7 meta-schema marker emitted at the root of every artifact.
pub const DRAFT7_URI: &str = "http://json-schema.org/draft-07/schema#";

/// Compile a definition into a self-contained JSON Schema draft-7 value.
///
/// The definition is checked for internal consistency first; an
/// inconsistent definition is fatal and produces no output.
///
/// # Errors
///
/// Returns [`DefinitionError`] when the definition fails its
/// well-formedness check.
pub fn compile(schema: &Schema) -> Result<Value, DefinitionError> {
    schema.check()?;
    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::String(DRAFT7_URI.to_string()));
    emit_node(schema, &mut root);
    Ok(Value::Object(root))
}

/// Compile a definition and render it as artifact text: pretty-printed
/// JSON with two-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns [`CompileError::Definition`] for an ill-formed definition or
/// [`CompileError::Serialize`] if the value cannot be rendered.
pub fn render(schema: &Schema) -> Result<String, CompileError> {
    let value = compile(schema)?;
    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');
    Ok(text)
}

/// Compile a definition and write the artifact to `path`, creating
/// intermediate directories as needed.
///
/// Any existing artifact at `path` is overwritten unconditionally. The
/// write is atomic: the artifact is rendered into a temporary file in the
/// destination directory and renamed into place, so on failure no partial
/// artifact remains on disk.
///
/// # Errors
///
/// Returns [`CompileError`] for ill-formed definitions, serialization
/// failures, or filesystem errors; all are fatal.
pub fn write_artifact(schema: &Schema, path: &Path) -> Result<(), CompileError> {
    let text = render(schema)?;

    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir).map_err(|e| io_error(path, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| io_error(path, e))?;
    tmp.write_all(text.as_bytes()).map_err(|e| io_error(path, e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;

    tracing::debug!(path = %path.display(), "wrote schema artifact");
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CompileError {
    CompileError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Draft-7 `type` keyword value: the bare type name, or a two-element
/// type array when the node also accepts `null`.
fn type_value(name: &str, nullable: bool) -> Value {
    if nullable {
        json!([name, "null"])
    } else {
        json!(name)
    }
}

/// Emit one definition node into `map` as draft-7 vocabulary.
fn emit_node(schema: &Schema, map: &mut Map<String, Value>) {
    if let Some(title) = &schema.title {
        map.insert("title".to_string(), Value::String(title.clone()));
    }

    match &schema.kind {
        Kind::String(spec) => {
            map.insert("type".to_string(), type_value("string", schema.nullable));
            if let Some(min) = spec.min_len {
                map.insert("minLength".to_string(), json!(min));
            }
            if let Some(max) = spec.max_len {
                map.insert("maxLength".to_string(), json!(max));
            }
            // JSON Schema cannot express a trim transform; a trimmed string
            // with a minimum length instead requires at least one
            // non-whitespace character.
            if spec.trim && spec.min_len.is_some_and(|min| min >= 1) {
                map.insert("pattern".to_string(), json!("\\S"));
            }
            if let Some(default) = &spec.default {
                map.insert("default".to_string(), Value::String(default.clone()));
            }
        }
        Kind::Integer(spec) => {
            map.insert("type".to_string(), type_value("integer", schema.nullable));
            if let Some(min) = spec.min {
                map.insert("minimum".to_string(), json!(min));
            }
            if let Some(max) = spec.max {
                map.insert("maximum".to_string(), json!(max));
            }
            if let Some(default) = spec.default {
                map.insert("default".to_string(), json!(default));
            }
        }
        Kind::Boolean(spec) => {
            map.insert("type".to_string(), type_value("boolean", schema.nullable));
            if let Some(default) = spec.default {
                map.insert("default".to_string(), Value::Bool(default));
            }
        }
        Kind::Enum(spec) => {
            map.insert("type".to_string(), type_value("string", schema.nullable));
            let mut variants: Vec<Value> = spec
                .variants
                .iter()
                .map(|v| Value::String(v.clone()))
                .collect();
            if schema.nullable {
                variants.push(Value::Null);
            }
            map.insert("enum".to_string(), Value::Array(variants));
            if let Some(default) = &spec.default {
                map.insert("default".to_string(), Value::String(default.clone()));
            }
        }
        Kind::Array(spec) => {
            map.insert("type".to_string(), type_value("array", schema.nullable));
            let mut items = Map::new();
            emit_node(&spec.items, &mut items);
            map.insert("items".to_string(), Value::Object(items));
            if let Some(min) = spec.min_items {
                map.insert("minItems".to_string(), json!(min));
            }
        }
        Kind::Object(spec) => {
            map.insert("type".to_string(), type_value("object", schema.nullable));
            emit_object(spec, map);
        }
    }

    if let Some(description) = &schema.description {
        map.insert("description".to_string(), Value::String(description.clone()));
    }
    if !schema.examples.is_empty() {
        map.insert(
            "examples".to_string(),
            Value::Array(schema.examples.clone()),
        );
    }
}

fn emit_object(spec: &ObjectSpec, map: &mut Map<String, Value>) {
    let mut properties = Map::new();
    let mut required: Vec<Value> = Vec::new();

    for field in &spec.fields {
        let mut node = Map::new();
        emit_node(&field.schema, &mut node);
        properties.insert(field.name.clone(), Value::Object(node));

        // A field with a default is satisfied by the default when absent,
        // so it is never listed as required.
        if field.required && field.schema.default_value().is_none() {
            required.push(Value::String(field.name.clone()));
        }
    }

    map.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        map.insert("required".to_string(), Value::Array(required));
    }
    // additionalProperties is deliberately left open: content authors may
    // attach auxiliary fields.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::{ArraySpec, BoolSpec, EnumSpec, Field, IntegerSpec, StringSpec};

    fn sample_schema() -> Schema {
        Schema::new(Kind::Object(ObjectSpec {
            fields: vec![
                Field::required(
                    "name",
                    Schema::new(Kind::String(StringSpec {
                        trim: true,
                        min_len: Some(1),
                        ..Default::default()
                    }))
                    .with_description("The name."),
                ),
                Field::required(
                    "rating",
                    Schema::new(Kind::Integer(IntegerSpec {
                        min: Some(1),
                        max: Some(5),
                        default: Some(1),
                    })),
                ),
                Field::optional(
                    "tags",
                    Schema::new(Kind::Array(ArraySpec {
                        items: Box::new(Schema::new(Kind::String(StringSpec::default()))),
                        min_items: Some(1),
                    })),
                ),
            ],
        }))
        .with_title("Sample")
    }

    #[test]
    fn root_carries_draft7_marker_and_title() {
        let value = compile(&sample_schema()).unwrap();
        assert_eq!(value["$schema"], DRAFT7_URI);
        assert_eq!(value["title"], "Sample");
        assert_eq!(value["type"], "object");
    }

    #[test]
    fn defaulted_field_is_not_required() {
        let value = compile(&sample_schema()).unwrap();
        let required = value["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "name");
    }

    #[test]
    fn trimmed_min_length_string_emits_pattern() {
        let value = compile(&sample_schema()).unwrap();
        let name = &value["properties"]["name"];
        assert_eq!(name["minLength"], 1);
        assert_eq!(name["pattern"], "\\S");
    }

    #[test]
    fn untrimmed_string_has_no_pattern() {
        let schema = Schema::new(Kind::String(StringSpec {
            min_len: Some(1),
            ..Default::default()
        }));
        let value = compile(&schema).unwrap();
        assert!(value.get("pattern").is_none());
    }

    #[test]
    fn integer_range_uses_inclusive_bounds() {
        let value = compile(&sample_schema()).unwrap();
        let rating = &value["properties"]["rating"];
        assert_eq!(rating["type"], "integer");
        assert_eq!(rating["minimum"], 1);
        assert_eq!(rating["maximum"], 5);
        assert_eq!(rating["default"], 1);
    }

    #[test]
    fn array_emits_items_and_min_items() {
        let value = compile(&sample_schema()).unwrap();
        let tags = &value["properties"]["tags"];
        assert_eq!(tags["type"], "array");
        assert_eq!(tags["minItems"], 1);
        assert_eq!(tags["items"]["type"], "string");
    }

    #[test]
    fn type_keyword_is_bare_unless_nullable() {
        let plain = compile(&Schema::new(Kind::Boolean(BoolSpec::default()))).unwrap();
        assert_eq!(plain["type"], "boolean");

        let nullable =
            compile(&Schema::new(Kind::Boolean(BoolSpec::default())).nullable()).unwrap();
        assert_eq!(nullable["type"], json!(["boolean", "null"]));
    }

    #[test]
    fn nullable_string_accepts_null_type() {
        let schema = Schema::new(Kind::String(StringSpec::default())).nullable();
        let value = compile(&schema).unwrap();
        assert_eq!(value["type"], serde_json::json!(["string", "null"]));
    }

    #[test]
    fn nullable_enum_lists_null_variant() {
        let schema = Schema::new(Kind::Enum(EnumSpec {
            variants: vec!["a".to_string(), "b".to_string()],
            default: None,
        }))
        .nullable();
        let value = compile(&schema).unwrap();
        let variants = value["enum"].as_array().unwrap();
        assert!(variants.contains(&Value::Null));
    }

    #[test]
    fn additional_properties_left_open() {
        let value = compile(&sample_schema()).unwrap();
        assert!(value.get("additionalProperties").is_none());
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(&sample_schema()).unwrap();
        let b = render(&sample_schema()).unwrap();
        assert_eq!(a, b);
        assert!(a.ends_with('\n'));
        assert!(a.contains("  \"$schema\""));
    }

    #[test]
    fn ill_formed_definition_fails_fatally() {
        let schema = Schema::new(Kind::Integer(IntegerSpec {
            min: Some(9),
            max: Some(1),
            default: None,
        }));
        assert!(compile(&schema).is_err());
    }

    #[test]
    fn write_artifact_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("schemas")
            .join("legend-in-the-mist")
            .join("sample.schema.json");

        write_artifact(&sample_schema(), &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        write_artifact(&sample_schema(), &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);

        let parsed: Value = serde_json::from_str(&second).unwrap();
        assert_eq!(parsed["$schema"], DRAFT7_URI);
    }

    #[test]
    fn failed_compilation_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.schema.json");
        let schema = Schema::new(Kind::Enum(EnumSpec::default()));
        assert!(write_artifact(&schema, &path).is_err());
        assert!(!path.exists());
    }
}
