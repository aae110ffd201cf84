//! Manifest model
//!
//! The manifest lists the glyphs of the icon font in the order their code
//! points are assigned, together with the font and QML output settings.

use crate::core::errors::{IconFontError, Result};
use crate::data::schema::Validator;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Validated manifest document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    /// Path of the generated QML singleton
    pub qml_name: PathBuf,
    /// Resource prefix prepended to `font_file` inside the QML singleton
    pub qml_file_prefix: String,
    /// Output font file
    pub font_file: String,
    /// Font family name
    pub font_name: String,
    pub glyphs: Vec<GlyphSpec>,
}

/// One icon of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlyphSpec {
    pub key: String,
    /// SVG file holding the glyph outline
    pub path: PathBuf,
    /// Ignored on input, code points are always recomputed
    #[serde(default)]
    pub charcode: Option<String>,
}

/// Font level data shared by the font and the QML singleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMeta {
    pub family_name: String,
    pub font_file: String,
    pub resource_prefix: String,
}

impl FontMeta {
    /// Path the QML layer uses to load the font
    pub fn resource_path(&self) -> String {
        format!("{}{}", self.resource_prefix, self.font_file)
    }
}

impl Manifest {
    /// Parse a manifest document.
    ///
    /// Returns `Ok(None)` when the document is falsy (`null`, `false`, `0`,
    /// an empty string, array or object): such a manifest describes no work.
    pub fn parse(text: &str, validator: &dyn Validator) -> Result<Option<Self>> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_document(document, validator)
    }

    pub fn from_document(document: Value, validator: &dyn Validator) -> Result<Option<Self>> {
        if is_falsy(&document) {
            return Ok(None);
        }

        validator.validate(&document)?;

        let manifest: Manifest = serde_json::from_value(document)?;
        manifest.check()?;
        Ok(Some(manifest))
    }

    /// Enforce the invariants the schema cannot express
    pub fn check(&self) -> Result<()> {
        if self.glyphs.is_empty() {
            return Err(IconFontError::EmptyGlyphList);
        }

        let mut seen = HashSet::with_capacity(self.glyphs.len());
        for glyph in &self.glyphs {
            if !seen.insert(glyph.key.as_str()) {
                return Err(IconFontError::DuplicateGlyphKey {
                    key: glyph.key.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn font_path(&self) -> &Path {
        Path::new(&self.font_file)
    }

    pub fn font_meta(&self) -> FontMeta {
        FontMeta {
            family_name: self.font_name.clone(),
            font_file: self.font_file.clone(),
            resource_prefix: self.qml_file_prefix.clone(),
        }
    }
}

fn is_falsy(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{NoValidation, SchemaValidator};

    const MANIFEST: &str = r#"{
        "qml_name": "VLCIcons.qml",
        "qml_file_prefix": "qrc:///",
        "font_file": "VLCIcons.ttf",
        "font_name": "VLCIcons",
        "glyphs": [
            { "key": "play", "path": "svg/play.svg" },
            { "key": "pause", "path": "svg/pause.svg", "charcode": "\\ue042" }
        ]
    }"#;

    #[test]
    fn parses_manifest_in_order() {
        let manifest = Manifest::parse(MANIFEST, &SchemaValidator::default())
            .unwrap()
            .unwrap();

        let keys: Vec<_> = manifest.glyphs.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["play", "pause"]);
        assert_eq!(manifest.glyphs[1].charcode.as_deref(), Some("\\ue042"));
        assert_eq!(manifest.font_path(), Path::new("VLCIcons.ttf"));
        assert_eq!(manifest.font_meta().resource_path(), "qrc:///VLCIcons.ttf");
    }

    #[test]
    fn falsy_documents_describe_no_work() {
        for text in ["null", "false", "0", "\"\"", "[]", "{}"] {
            let parsed = Manifest::parse(text, &SchemaValidator::default()).unwrap();
            assert!(parsed.is_none(), "{text} should be a no-op");
        }
    }

    #[test]
    fn schema_runs_before_deserialization() {
        let err = Manifest::parse(r#"{"glyphs": []}"#, &SchemaValidator::default()).unwrap_err();
        assert!(matches!(err, IconFontError::SchemaValidation { .. }));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let text = MANIFEST.replace("\"pause\"", "\"play\"");
        let err = Manifest::parse(&text, &SchemaValidator::default()).unwrap_err();
        assert!(matches!(err, IconFontError::DuplicateGlyphKey { key } if key == "play"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let text = MANIFEST.replace("\"pause\"", "\"Play\"");
        assert!(Manifest::parse(&text, &SchemaValidator::default()).is_ok());
    }

    #[test]
    fn rejects_empty_glyph_list() {
        let text = r#"{
            "qml_name": "a.qml", "qml_file_prefix": "", "font_file": "a.ttf",
            "font_name": "A", "glyphs": []
        }"#;
        let err = Manifest::parse(text, &SchemaValidator::default()).unwrap_err();
        assert!(matches!(err, IconFontError::EmptyGlyphList));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Manifest::parse("{ not json", &NoValidation).unwrap_err();
        assert!(matches!(err, IconFontError::ManifestParse(_)));
    }
}
