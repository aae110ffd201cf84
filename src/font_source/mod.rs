//! Font source construction
//!
//! Metrics, outline import and assembly of the in-memory font document.

pub mod assembler;
pub mod metrics;
pub mod outline;

pub use assembler::{FontAssembler, FontDocument, GlyphSlot};
pub use metrics::IconMetrics;
pub use outline::{Outline, OutlineImporter, SvgOutlineImporter};
