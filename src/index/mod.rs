//! Companion QML singleton
//!
//! The singleton maps every glyph key to the escaped literal of its code
//! point and tells the QML layer where to load the font from. Entries keep
//! manifest order so regenerated files diff cleanly when glyphs are added.

pub mod identifier;
pub mod qml;

use crate::core::allocator::ResolvedGlyph;
use crate::core::errors::{IconFontError, Result};
use crate::data::manifest::FontMeta;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub use qml::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: String,
    pub code_point: char,
}

/// Lookup table written next to the font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexArtifact {
    pub family_name: String,
    /// Resource path the QML `FontLoader` loads, prefix included
    pub font_resource: String,
    pub entries: Vec<IndexEntry>,
}

/// Project the glyph table into an artifact, rejecting unusable keys
pub fn build(meta: &FontMeta, glyphs: &[ResolvedGlyph]) -> Result<IndexArtifact> {
    let entries = glyphs
        .iter()
        .map(|glyph| {
            if !identifier::is_valid_property_name(&glyph.key) {
                return Err(IconFontError::InvalidIdentifier {
                    key: glyph.key.clone(),
                });
            }
            Ok(IndexEntry {
                key: glyph.key.clone(),
                code_point: glyph.code_point,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexArtifact {
        family_name: meta.family_name.clone(),
        font_resource: meta.resource_path(),
        entries,
    })
}

/// Replace `destination` with `text`.
///
/// The text goes to a temporary file in the same directory first, so
/// readers never observe a half-written singleton. An existing file keeps
/// its permissions; a new one gets the umask defaults of a plain create.
pub fn write(text: &str, destination: &Path) -> Result<()> {
    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let io_err = |source| IconFontError::io(destination, source);

    let mut builder = tempfile::Builder::new();
    builder.prefix(".iconfont-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask at creation, like `File::create`
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(parent).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    if let Ok(existing) = std::fs::metadata(destination) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    file.persist(destination)
        .map_err(|err| IconFontError::io(destination, err.error))?;

    debug!("Wrote {} bytes to {}", text.len(), destination.display());
    Ok(())
}
