//! Pipeline driver
//!
//! A run moves through `Loaded → Allocated → FontWritten → ArtifactWritten →
//! Done` and stops at the first failure. The font is always written and
//! confirmed before the QML singleton, so an existing singleton implies a
//! matching font.

use crate::compiler::{FontBackend, FontcBackend};
use crate::core::allocator::allocate;
use crate::core::config::{CliArgs, ConfigFile};
use crate::core::errors::{IconFontError, Result};
use crate::data::manifest::Manifest;
use crate::data::schema::{SchemaValidator, Validator};
use crate::font_source::{FontAssembler, OutlineImporter, SvgOutlineImporter};
use crate::index;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Progress of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    Allocated,
    FontWritten,
    ArtifactWritten,
    Done,
    Failed(String),
}

/// Outputs of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub glyph_count: usize,
    pub font_path: PathBuf,
    pub artifact_path: PathBuf,
}

/// Sequences allocation, font assembly and artifact generation
pub struct Pipeline<'a> {
    validator: &'a dyn Validator,
    importer: &'a dyn OutlineImporter,
    backend: &'a dyn FontBackend,
    stage: RefCell<Stage>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        validator: &'a dyn Validator,
        importer: &'a dyn OutlineImporter,
        backend: &'a dyn FontBackend,
    ) -> Self {
        Self {
            validator,
            importer,
            backend,
            stage: RefCell::new(Stage::Loaded),
        }
    }

    /// Stage the most recent run ended in
    pub fn stage(&self) -> Stage {
        self.stage.borrow().clone()
    }

    /// Parse `text` as a manifest and build it.
    ///
    /// A falsy manifest is a successful run that writes nothing.
    pub fn run_document(&self, text: &str) -> Result<Option<RunReport>> {
        let manifest = match Manifest::parse(text, self.validator) {
            Ok(Some(manifest)) => manifest,
            Ok(None) => {
                info!("Manifest is empty, nothing to build");
                self.stage.replace(Stage::Done);
                return Ok(None);
            }
            Err(err) => {
                error!("Manifest rejected: {err}");
                self.stage.replace(Stage::Failed(err.to_string()));
                return Err(err);
            }
        };
        self.run(&manifest).map(Some)
    }

    /// Build `manifest`, leaving the final stage in [`Pipeline::stage`]
    pub fn run(&self, manifest: &Manifest) -> Result<RunReport> {
        let mut stage = Stage::Loaded;
        let result = self.advance(manifest, &mut stage);

        if let Err(err) = &result {
            error!("Run failed after {stage:?}: {err}");
            stage = Stage::Failed(err.to_string());
        }
        self.stage.replace(stage);
        result
    }

    fn advance(&self, manifest: &Manifest, stage: &mut Stage) -> Result<RunReport> {
        info!(
            "Building '{}' with {} glyphs",
            manifest.font_name,
            manifest.glyphs.len()
        );

        let glyphs = allocate(&manifest.glyphs)?;
        // Key validation happens here so a bad key never leaves a font behind
        let artifact = index::build(&manifest.font_meta(), &glyphs)?;
        enter(stage, Stage::Allocated);

        let font_path = manifest.font_path();
        let document = FontAssembler::new(self.importer).assemble(&manifest.font_name, &glyphs)?;
        self.backend
            .serialize(&document, font_path)
            .map_err(|cause| IconFontError::FontWrite {
                path: font_path.to_path_buf(),
                cause,
            })?;
        enter(stage, Stage::FontWritten);

        index::write(&index::render(&artifact), &manifest.qml_name)?;
        enter(stage, Stage::ArtifactWritten);

        enter(stage, Stage::Done);
        Ok(RunReport {
            glyph_count: glyphs.len(),
            font_path: font_path.to_path_buf(),
            artifact_path: manifest.qml_name.clone(),
        })
    }
}

fn enter(stage: &mut Stage, next: Stage) {
    info!("{stage:?} -> {next:?}");
    *stage = next;
}

/// Run the command line tool with the real validator, importer and compiler
pub fn run_app(cli_args: CliArgs, config: &ConfigFile) -> anyhow::Result<()> {
    let source = cli_args.manifest_source();
    debug!("Reading manifest from {}", source.describe());
    let text = source.read_to_string()?;

    let validator = SchemaValidator::default();
    let importer = SvgOutlineImporter::default();
    let backend = FontcBackend::new(config.fontc_command());

    let pipeline = Pipeline::new(&validator, &importer, &backend);
    if let Some(report) = pipeline.run_document(&text)? {
        info!(
            "Generated {} and {} ({} glyphs)",
            report.font_path.display(),
            report.artifact_path.display(),
            report.glyph_count
        );
    }
    Ok(())
}
