//! Font assembly
//!
//! Turns the allocated glyph table into a [`FontDocument`]: one glyph slot
//! per code point, each with an imported outline and square advances.

use crate::core::allocator::ResolvedGlyph;
use crate::core::errors::{IconFontError, Result};
use crate::font_source::metrics::IconMetrics;
use crate::font_source::outline::{Outline, OutlineImporter};
use std::collections::BTreeMap;
use tracing::debug;

/// One glyph of the font
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSlot {
    pub key: String,
    pub name: String,
    pub code_point: char,
    pub outline: Outline,
    pub advance_width: f64,
    pub advance_height: f64,
}

/// In-memory font built during a run
#[derive(Debug, Clone, PartialEq)]
pub struct FontDocument {
    pub family_name: String,
    pub metrics: IconMetrics,
    slots: BTreeMap<char, GlyphSlot>,
}

impl FontDocument {
    pub fn new(family_name: impl Into<String>, metrics: IconMetrics) -> Self {
        Self {
            family_name: family_name.into(),
            metrics,
            slots: BTreeMap::new(),
        }
    }

    /// Create the slot for `glyph`, using the font's advances
    pub fn create_slot(&mut self, glyph: &ResolvedGlyph, outline: Outline) -> &GlyphSlot {
        let slot = GlyphSlot {
            key: glyph.key.clone(),
            name: glyph.glyph_name(),
            code_point: glyph.code_point,
            outline,
            advance_width: self.metrics.advance_width,
            advance_height: self.metrics.advance_height,
        };
        self.slots.insert(glyph.code_point, slot);
        &self.slots[&glyph.code_point]
    }

    pub fn slot(&self, code_point: char) -> Option<&GlyphSlot> {
        self.slots.get(&code_point)
    }

    /// Slots in code point order
    pub fn slots(&self) -> impl Iterator<Item = &GlyphSlot> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Builds font documents using an injected outline importer
pub struct FontAssembler<'a> {
    importer: &'a dyn OutlineImporter,
    metrics: IconMetrics,
}

impl<'a> FontAssembler<'a> {
    pub fn new(importer: &'a dyn OutlineImporter) -> Self {
        Self {
            importer,
            metrics: IconMetrics::default(),
        }
    }

    /// Import every glyph, stopping at the first outline that fails
    pub fn assemble(&self, family_name: &str, glyphs: &[ResolvedGlyph]) -> Result<FontDocument> {
        let mut document = FontDocument::new(family_name, self.metrics);

        for glyph in glyphs {
            let outline = self.importer.import_outline(&glyph.path).map_err(|cause| {
                IconFontError::OutlineImport {
                    key: glyph.key.clone(),
                    path: glyph.path.clone(),
                    cause,
                }
            })?;

            let slot = document.create_slot(glyph, outline);
            debug!(
                "Imported '{}' as {} (U+{:04X}, {} contours)",
                slot.key,
                slot.name,
                slot.code_point as u32,
                slot.outline.contours.len()
            );
        }

        Ok(document)
    }
}
