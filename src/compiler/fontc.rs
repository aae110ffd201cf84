use crate::compiler::{FontBackend, OutputFormat};
use crate::core::errors::BackendError;
use crate::data::ufo::save_ufo;
use crate::font_source::FontDocument;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Executable used when no other compiler is configured
pub const DEFAULT_FONTC_COMMAND: &str = "fontc";

/// Writes UFO sources with norad and compiles TrueType fonts with `fontc`
#[derive(Debug, Clone)]
pub struct FontcBackend {
    command: String,
}

impl FontcBackend {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn compile_with_fontc(&self, document: &FontDocument, output_path: &Path) -> Result<(), BackendError> {
        let work_dir = tempfile::Builder::new().prefix("iconfont-").tempdir()?;
        let ufo_path = work_dir.path().join("font.ufo");
        save_ufo(document, &ufo_path)?;
        debug!("Wrote intermediate UFO to {}", ufo_path.display());

        let mut cmd = Command::new(&self.command);
        cmd.arg("--build-dir")
            .arg(work_dir.path().join("build"))
            .arg("--output-file")
            .arg(output_path)
            .arg(&ufo_path);

        let output = cmd.output().map_err(|source| BackendError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::Compiler {
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Default for FontcBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FONTC_COMMAND)
    }
}

impl FontBackend for FontcBackend {
    fn serialize(&self, document: &FontDocument, path: &Path) -> Result<(), BackendError> {
        match OutputFormat::from_path(path)? {
            OutputFormat::Ufo => save_ufo(document, path)?,
            OutputFormat::TrueType => self.compile_with_fontc(document, path)?,
        }

        info!("Wrote {} glyphs to {}", document.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allocator::ResolvedGlyph;
    use crate::font_source::{IconMetrics, Outline};
    use kurbo::{Rect, Shape};
    use std::path::PathBuf;

    fn document() -> FontDocument {
        let mut document = FontDocument::new("Icons", IconMetrics::default());
        for (i, key) in ["home", "search"].into_iter().enumerate() {
            let glyph = ResolvedGlyph {
                key: key.to_string(),
                path: PathBuf::from(format!("{key}.svg")),
                code_point: char::from_u32(0xE000 + i as u32).unwrap(),
            };
            let square = Rect::new(64.0, 64.0, 960.0, 960.0).to_path(0.1);
            document.create_slot(&glyph, Outline::new(vec![square]));
        }
        document
    }

    #[test]
    fn ufo_targets_are_saved_directly() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Icons.ufo");

        FontcBackend::new("unused-compiler")
            .serialize(&document(), &target)
            .unwrap();

        let font = norad::Font::load(&target).unwrap();
        let layer = font.default_layer();
        assert_eq!(layer.len(), 3);
        assert!(layer
            .get_glyph("uniE001")
            .unwrap()
            .codepoints
            .contains('\u{E001}'));
        assert_eq!(font.font_info.open_type_os2_typo_line_gap, Some(0));
    }

    #[test]
    fn missing_compiler_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Icons.ttf");

        let err = FontcBackend::new("iconfont-test-no-such-compiler")
            .serialize(&document(), &target)
            .unwrap_err();

        assert!(matches!(err, BackendError::Spawn { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn unsupported_target_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Icons.woff");

        let err = FontcBackend::default()
            .serialize(&document(), &target)
            .unwrap_err();

        assert!(matches!(err, BackendError::UnsupportedFormat(_)));
        assert!(!target.exists());
    }
}
