//! Error types for the icon font pipeline
//!
//! Every stage reports failures through [`IconFontError`]. The two injected
//! capabilities (outline import and font serialization) have their own error
//! enums which are carried as the `cause` of the matching pipeline error.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T, E = IconFontError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum IconFontError {
    #[error("manifest failed schema validation at '{pointer}': {message}")]
    SchemaValidation { pointer: String, message: String },

    #[error("manifest could not be decoded: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("manifest does not declare any glyphs")]
    EmptyGlyphList,

    #[error("glyph key '{key}' appears more than once in the manifest")]
    DuplicateGlyphKey { key: String },

    #[error(
        "{requested} glyphs requested but the private-use area only holds {capacity} code points"
    )]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("failed to import outline for glyph '{key}' from {}", path.display())]
    OutlineImport {
        key: String,
        path: PathBuf,
        #[source]
        cause: ImportError,
    },

    #[error("failed to write font to {}", path.display())]
    FontWrite {
        path: PathBuf,
        #[source]
        cause: BackendError,
    },

    #[error("glyph key '{key}' is not usable as a QML property name")]
    InvalidIdentifier { key: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconFontError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure reported by an [`OutlineImporter`](crate::font_source::OutlineImporter)
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read outline resource: {0}")]
    Read(#[from] std::io::Error),

    #[error("could not parse SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("SVG has a degenerate size ({width}x{height})")]
    DegenerateSize { width: f32, height: f32 },
}

/// Failure reported by a [`FontBackend`](crate::compiler::FontBackend)
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported font format '{0}' (expected .ttf or .ufo)")]
    UnsupportedFormat(String),

    #[error("could not write UFO source: {0}")]
    Ufo(#[from] norad::error::FontWriteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not launch font compiler '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("font compiler exited with {status}: {stderr}")]
    Compiler { status: ExitStatus, stderr: String },
}
