//! Font serialization backends
//!
//! A [`FontBackend`] writes a finished [`FontDocument`] to its output path.
//! The pipeline only talks to this trait, so tests can substitute a fake
//! and the real compiler is never needed to exercise the driver.

pub mod fontc;

use crate::core::errors::BackendError;
use crate::font_source::FontDocument;
use std::path::Path;

pub use fontc::FontcBackend;

pub trait FontBackend {
    fn serialize(&self, document: &FontDocument, path: &Path) -> Result<(), BackendError>;
}

/// Output format picked from the target path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    TrueType,
    Ufo,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, BackendError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "ttf" => Ok(Self::TrueType),
            "ufo" => Ok(Self::Ufo),
            _ => Err(BackendError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("fonts/VLCIcons.ttf")).unwrap(),
            OutputFormat::TrueType
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("VLCIcons.TTF")).unwrap(),
            OutputFormat::TrueType
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("build/VLCIcons.ufo")).unwrap(),
            OutputFormat::Ufo
        );
    }

    #[test]
    fn rejects_other_formats() {
        for name in ["VLCIcons.woff2", "VLCIcons"] {
            assert!(matches!(
                OutputFormat::from_path(Path::new(name)),
                Err(BackendError::UnsupportedFormat(_))
            ));
        }
    }
}
