//! Input documents and font data formats

pub mod conversions;
pub mod manifest;
pub mod schema;
pub mod ufo;

pub use manifest::{FontMeta, GlyphSpec, Manifest};
pub use schema::{NoValidation, SchemaValidator, Validator};
