//! Code point allocation
//!
//! Glyphs are numbered from the start of the Basic Multilingual Plane's
//! private-use area in manifest order. The table is computed in full before
//! any font is assembled, so the font and the QML singleton share it.

use crate::core::errors::{IconFontError, Result};
use crate::data::manifest::GlyphSpec;
use std::path::PathBuf;
use tracing::warn;

/// First code point of the private-use area
pub const PUA_START: u32 = 0xE000;
/// Last code point of the private-use area
pub const PUA_END: u32 = 0xF8FF;
/// Number of glyphs the private-use area can hold
pub const PUA_CAPACITY: usize = (PUA_END - PUA_START + 1) as usize;

/// A glyph with its assigned code point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGlyph {
    pub key: String,
    pub path: PathBuf,
    pub code_point: char,
}

impl ResolvedGlyph {
    /// Glyph name used inside the font, `uniE000` style
    pub fn glyph_name(&self) -> String {
        format!("uni{:04X}", self.code_point as u32)
    }
}

/// Assign `U+E000 + i` to the glyph at position `i`.
pub fn allocate(glyphs: &[GlyphSpec]) -> Result<Vec<ResolvedGlyph>> {
    if glyphs.len() > PUA_CAPACITY {
        return Err(IconFontError::CapacityExceeded {
            requested: glyphs.len(),
            capacity: PUA_CAPACITY,
        });
    }

    glyphs
        .iter()
        .zip(PUA_START..=PUA_END)
        .map(|(glyph, value)| {
            let code_point = char::from_u32(value).ok_or(IconFontError::CapacityExceeded {
                requested: glyphs.len(),
                capacity: PUA_CAPACITY,
            })?;

            if let Some(requested) = &glyph.charcode {
                if parse_charcode(requested) != Some(code_point) {
                    warn!(
                        "Ignoring charcode {requested} for glyph '{}', assigned U+{:04X}",
                        glyph.key, value
                    );
                }
            }

            Ok(ResolvedGlyph {
                key: glyph.key.clone(),
                path: glyph.path.clone(),
                code_point,
            })
        })
        .collect()
}

/// Read a charcode written as an escaped literal or in `U+E000` notation
fn parse_charcode(text: &str) -> Option<char> {
    let digits = text
        .strip_prefix("\\u")
        .or_else(|| text.strip_prefix("U+"))
        .or_else(|| text.strip_prefix("u+"))?;
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}
