//! UFO file I/O operations

use crate::font_source::FontDocument;
use norad::error::FontWriteError;
use std::path::Path;

/// Write the font document to disk as a UFO source, replacing any existing one
pub fn save_ufo(document: &FontDocument, path: impl AsRef<Path>) -> Result<(), FontWriteError> {
    document.to_norad_font().save(path)
}
