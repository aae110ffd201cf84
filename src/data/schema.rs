//! Structural validation of manifest documents
//!
//! The manifest schema is a small JSON Schema subset (`type`, `properties`,
//! `required`, `items`). Validation is an injected capability so callers
//! decide explicitly whether documents are checked.

use crate::core::errors::{IconFontError, Result};
use serde_json::{json, Value};

/// Checks a raw manifest document before it is deserialized
pub trait Validator {
    fn validate(&self, document: &Value) -> Result<()>;
}

/// Validator that accepts every document
#[derive(Debug, Default, Clone, Copy)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(&self, _document: &Value) -> Result<()> {
        Ok(())
    }
}

/// Schema describing the manifest accepted by `iconfont`
pub fn manifest_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "qml_name": { "type": "string", "description": "path of the generated QML singleton" },
            "qml_file_prefix": { "type": "string", "description": "import path of the font within QML" },
            "font_file": { "type": "string", "description": "output font file" },
            "font_name": { "type": "string", "description": "font family name" },
            "glyphs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "key": { "type": "string", "description": "glyph keyword, unique within the list" },
                        "path": { "type": "string", "description": "SVG used for the glyph" },
                        "charcode": { "type": "string", "description": "code point, recomputed on every run" }
                    },
                    "required": ["key", "path"]
                }
            }
        },
        "required": ["glyphs", "qml_name", "font_name", "font_file", "qml_file_prefix"]
    })
}

/// Validator backed by a JSON schema document
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: Value,
}

impl SchemaValidator {
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(manifest_schema())
    }
}

impl Validator for SchemaValidator {
    fn validate(&self, document: &Value) -> Result<()> {
        check(&self.schema, document, "")
    }
}

fn check(schema: &Value, data: &Value, pointer: &str) -> Result<()> {
    if let Some(ty) = schema.get("type").and_then(Value::as_str) {
        if !matches_type(ty, data) {
            return Err(violation(
                pointer,
                format!("expected {ty}, found {}", type_name(data)),
            ));
        }
    }

    if let Some(object) = data.as_object() {
        if let Some(required) = schema.get("required").and_then(Value::as_array) {
            for field in required.iter().filter_map(Value::as_str) {
                if !object.contains_key(field) {
                    return Err(violation(
                        pointer,
                        format!("missing required property '{field}'"),
                    ));
                }
            }
        }

        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (name, property_schema) in properties {
                if let Some(value) = object.get(name) {
                    check(property_schema, value, &format!("{pointer}/{name}"))?;
                }
            }
        }
    }

    if let (Some(items), Some(item_schema)) = (data.as_array(), schema.get("items")) {
        for (index, item) in items.iter().enumerate() {
            check(item_schema, item, &format!("{pointer}/{index}"))?;
        }
    }

    Ok(())
}

fn matches_type(ty: &str, data: &Value) -> bool {
    match ty {
        "object" => data.is_object(),
        "array" => data.is_array(),
        "string" => data.is_string(),
        "number" => data.is_number(),
        "integer" => data.is_i64() || data.is_u64(),
        "boolean" => data.is_boolean(),
        "null" => data.is_null(),
        _ => true,
    }
}

fn type_name(data: &Value) -> &'static str {
    match data {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn violation(pointer: &str, message: String) -> IconFontError {
    let pointer = if pointer.is_empty() { "/" } else { pointer };
    IconFontError::SchemaValidation {
        pointer: pointer.to_string(),
        message,
    }
}
