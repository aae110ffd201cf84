//! Command line interface for iconfont
//!
//! The tool takes a single manifest argument. Everything else about a run
//! is described by the manifest itself.

use crate::io::ManifestSource;
use clap::Parser;
use std::path::PathBuf;

/// iconfont CLI arguments
///
/// Examples:
///   iconfont icons.json                 # Build from a manifest file
///   iconfont < icons.json               # Read the manifest from stdin
///   cat icons.json | iconfont -         # Same, explicit
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "iconfont",
    version,
    about = "Generate an icon font for QML from SVG files",
    long_about = "Reads a JSON manifest listing SVG glyphs, builds a font with one private-use code point per glyph and writes a QML singleton mapping every glyph key to its character."
)]
pub struct CliArgs {
    /// Manifest describing the font and its glyphs
    ///
    /// Reads standard input when omitted or when given as '-'.
    #[clap(
        value_name = "MANIFEST",
        help = "The input manifest (defaults to stdin)",
        long_help = "Path of the JSON manifest to build. The manifest names the font file, the QML singleton, the resource prefix and the list of glyphs. Reads standard input when omitted or when given as '-'."
    )]
    pub manifest: Option<PathBuf>,
}

impl CliArgs {
    pub fn manifest_source(&self) -> ManifestSource {
        ManifestSource::from_arg(self.manifest.as_deref())
    }
}
