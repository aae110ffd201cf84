#[cfg(test)]
mod pipeline_tests {
    use crate::compiler::FontBackend;
    use crate::core::errors::{BackendError, IconFontError, ImportError};
    use crate::core::runner::{Pipeline, Stage};
    use crate::data::schema::SchemaValidator;
    use crate::font_source::{FontDocument, Outline, OutlineImporter};
    use crate::index::qml::code_point_literal;
    use kurbo::{Rect, Shape};
    use serde_json::json;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Squares for every SVG that exists on disk
    struct FakeImporter;

    impl OutlineImporter for FakeImporter {
        fn import_outline(&self, resource: &Path) -> Result<Outline, ImportError> {
            std::fs::metadata(resource)?;
            Ok(Outline::new(vec![
                Rect::new(0.0, 0.0, 1024.0, 1024.0).to_path(0.1)
            ]))
        }
    }

    /// Writes the code point table instead of a real font
    #[derive(Default)]
    struct FakeBackend {
        fail: bool,
        written: RefCell<Vec<(char, String)>>,
    }

    impl FontBackend for FakeBackend {
        fn serialize(&self, document: &FontDocument, path: &Path) -> Result<(), BackendError> {
            if self.fail {
                return Err(BackendError::UnsupportedFormat(path.display().to_string()));
            }
            let table: Vec<_> = document
                .slots()
                .map(|slot| (slot.code_point, slot.key.clone()))
                .collect();
            let text: String = table
                .iter()
                .map(|(code_point, key)| format!("{:04X} {key}\n", *code_point as u32))
                .collect();
            std::fs::write(path, text)?;
            *self.written.borrow_mut() = table;
            Ok(())
        }
    }

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new(svgs: &[&str]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            for name in svgs {
                std::fs::write(dir.path().join(name), "<svg/>").unwrap();
            }
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn manifest(&self, glyphs: &[(&str, &str)]) -> String {
            let glyphs: Vec<_> = glyphs
                .iter()
                .map(|(key, svg)| json!({ "key": key, "path": self.path(svg) }))
                .collect();
            json!({
                "qml_name": self.path("Icons.qml"),
                "qml_file_prefix": "qrc:///fonts/",
                "font_file": self.path("Icons.ttf"),
                "font_name": "Icons",
                "glyphs": glyphs,
            })
            .to_string()
        }

        fn run(&self, text: &str, backend: &FakeBackend) -> crate::core::errors::Result<()> {
            let validator = SchemaValidator::default();
            Pipeline::new(&validator, &FakeImporter, backend)
                .run_document(text)
                .map(|_| ())
        }
    }

    #[test]
    fn builds_font_and_singleton_for_two_icons() {
        let ws = Workspace::new(&["home.svg", "search.svg"]);
        let backend = FakeBackend::default();
        let text = ws.manifest(&[("home", "home.svg"), ("search", "search.svg")]);

        ws.run(&text, &backend).unwrap();

        assert_eq!(
            *backend.written.borrow(),
            [
                ('\u{E000}', "home".to_string()),
                ('\u{E001}', "search".to_string())
            ]
        );

        let qml = std::fs::read_to_string(ws.path("Icons.qml")).unwrap();
        assert!(qml.contains("readonly property string fontFamily: \"Icons\""));
        assert!(qml.contains(&format!(
            "readonly property string home : \"{}\"",
            code_point_literal('\u{E000}')
        )));
        assert!(qml.contains(&format!(
            "readonly property string search : \"{}\"",
            code_point_literal('\u{E001}')
        )));
        assert!(qml.contains(&format!(
            "source: \"qrc:///fonts/{}\"",
            ws.path("Icons.ttf").display()
        )));
    }

    #[test]
    fn singleton_keys_match_manifest_order() {
        let names = ["zoom", "alpha", "middle", "beta"];
        let svgs: Vec<String> = names.iter().map(|n| format!("{n}.svg")).collect();
        let svg_refs: Vec<&str> = svgs.iter().map(String::as_str).collect();
        let ws = Workspace::new(&svg_refs);
        let glyphs: Vec<(&str, &str)> = names.iter().copied().zip(svg_refs.iter().copied()).collect();

        ws.run(&ws.manifest(&glyphs), &FakeBackend::default()).unwrap();

        let qml = std::fs::read_to_string(ws.path("Icons.qml")).unwrap();
        let keys: Vec<&str> = qml
            .lines()
            .filter_map(|line| line.trim().strip_prefix("readonly property string "))
            .filter_map(|rest| rest.split_once(" : ").map(|(key, _)| key))
            .collect();
        assert_eq!(keys, names);
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let ws = Workspace::new(&["home.svg", "search.svg"]);
        let text = ws.manifest(&[("home", "home.svg"), ("search", "search.svg")]);

        ws.run(&text, &FakeBackend::default()).unwrap();
        let first = (
            std::fs::read(ws.path("Icons.ttf")).unwrap(),
            std::fs::read(ws.path("Icons.qml")).unwrap(),
        );
        ws.run(&text, &FakeBackend::default()).unwrap();
        let second = (
            std::fs::read(ws.path("Icons.ttf")).unwrap(),
            std::fs::read(ws.path("Icons.qml")).unwrap(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn font_failure_leaves_singleton_untouched() {
        let ws = Workspace::new(&["home.svg"]);
        std::fs::write(ws.path("Icons.qml"), "previous").unwrap();
        let backend = FakeBackend {
            fail: true,
            ..Default::default()
        };

        let err = ws
            .run(&ws.manifest(&[("home", "home.svg")]), &backend)
            .unwrap_err();

        assert!(matches!(err, IconFontError::FontWrite { path, .. } if path == ws.path("Icons.ttf")));
        assert_eq!(
            std::fs::read_to_string(ws.path("Icons.qml")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn duplicate_keys_write_nothing() {
        let ws = Workspace::new(&["home.svg"]);
        let text = ws.manifest(&[("home", "home.svg"), ("home", "home.svg")]);

        let err = ws.run(&text, &FakeBackend::default()).unwrap_err();

        assert!(matches!(err, IconFontError::DuplicateGlyphKey { .. }));
        assert!(!ws.path("Icons.ttf").exists());
        assert!(!ws.path("Icons.qml").exists());
    }

    #[test]
    fn too_many_glyphs_write_nothing() {
        let ws = Workspace::new(&["icon.svg"]);
        let keys: Vec<String> = (0..6401).map(|i| format!("icon_{i}")).collect();
        let glyphs: Vec<(&str, &str)> = keys.iter().map(|k| (k.as_str(), "icon.svg")).collect();

        let err = ws
            .run(&ws.manifest(&glyphs), &FakeBackend::default())
            .unwrap_err();

        assert!(matches!(err, IconFontError::CapacityExceeded { requested: 6401, .. }));
        assert!(!ws.path("Icons.ttf").exists());
        assert!(!ws.path("Icons.qml").exists());
    }

    #[test]
    fn missing_svg_names_key_and_path() {
        let ws = Workspace::new(&["home.svg"]);
        let text = ws.manifest(&[("home", "home.svg"), ("gone", "gone.svg")]);

        let err = ws.run(&text, &FakeBackend::default()).unwrap_err();

        match err {
            IconFontError::OutlineImport { key, path, .. } => {
                assert_eq!(key, "gone");
                assert_eq!(path, ws.path("gone.svg"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!ws.path("Icons.ttf").exists());
        assert!(!ws.path("Icons.qml").exists());
    }

    #[test]
    fn invalid_key_is_rejected_before_the_font() {
        let ws = Workspace::new(&["home.svg"]);
        let text = ws.manifest(&[("Home-Icon", "home.svg")]);

        let err = ws.run(&text, &FakeBackend::default()).unwrap_err();

        assert!(matches!(err, IconFontError::InvalidIdentifier { key } if key == "Home-Icon"));
        assert!(!ws.path("Icons.ttf").exists());
    }

    #[test]
    fn falsy_manifest_is_a_quiet_success() {
        let ws = Workspace::new(&[]);
        let backend = FakeBackend::default();

        for text in ["null", "{}", "[]", "false"] {
            ws.run(text, &backend).unwrap();
        }

        assert!(backend.written.borrow().is_empty());
        assert_eq!(std::fs::read_dir(ws.dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn schema_violation_is_reported() {
        let ws = Workspace::new(&[]);
        let err = ws
            .run(r#"{"font_name": "Icons"}"#, &FakeBackend::default())
            .unwrap_err();
        assert!(matches!(err, IconFontError::SchemaValidation { .. }));
    }

    #[test]
    fn pipeline_records_the_stage_it_ended_in() {
        let ws = Workspace::new(&["home.svg"]);
        let text = ws.manifest(&[("home", "home.svg")]);
        let validator = SchemaValidator::default();

        let backend = FakeBackend::default();
        let pipeline = Pipeline::new(&validator, &FakeImporter, &backend);
        assert_eq!(pipeline.stage(), Stage::Loaded);
        pipeline.run_document(&text).unwrap();
        assert_eq!(pipeline.stage(), Stage::Done);

        let failing = FakeBackend {
            fail: true,
            ..Default::default()
        };
        let pipeline = Pipeline::new(&validator, &FakeImporter, &failing);
        let err = pipeline.run_document(&text).unwrap_err();
        assert_eq!(pipeline.stage(), Stage::Failed(err.to_string()));
    }

    #[test]
    fn rejected_manifest_marks_the_run_failed() {
        let validator = SchemaValidator::default();
        let backend = FakeBackend::default();
        let pipeline = Pipeline::new(&validator, &FakeImporter, &backend);

        pipeline.run_document(r#"{"font_name": 1}"#).unwrap_err();

        assert!(matches!(pipeline.stage(), Stage::Failed(_)));
    }
}
