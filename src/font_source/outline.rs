//! Glyph outlines and the SVG outline importer

use crate::core::errors::ImportError;
use crate::font_source::metrics::IconMetrics;
use kurbo::{BezPath, Point};
use std::path::Path;
use tracing::debug;
use usvg::tiny_skia_path::PathSegment;

/// Closed contours of one glyph in font units (y up, baseline at 0)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub contours: Vec<BezPath>,
}

impl Outline {
    pub fn new(contours: Vec<BezPath>) -> Self {
        Self { contours }
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}

/// Converts an outline resource into a font-space [`Outline`]
pub trait OutlineImporter {
    fn import_outline(&self, resource: &Path) -> Result<Outline, ImportError>;
}

/// Imports SVG documents with `usvg`.
///
/// The SVG height is mapped onto the em square and the y axis is flipped so
/// the top of the SVG lands on the ascender.
#[derive(Debug, Clone, Copy)]
pub struct SvgOutlineImporter {
    units_per_em: f64,
    ascender: f64,
}

impl SvgOutlineImporter {
    pub fn new(metrics: &IconMetrics) -> Self {
        Self {
            units_per_em: metrics.units_per_em,
            ascender: metrics.ascender,
        }
    }

    /// Import an SVG document held in memory
    pub fn import_svg(&self, data: &[u8]) -> Result<Outline, ImportError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;

        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(ImportError::DegenerateSize {
                width: size.width(),
                height: size.height(),
            });
        }

        let mapping = SvgToFont {
            scale: self.units_per_em / f64::from(size.height()),
            ascender: self.ascender,
        };

        let mut contours = Vec::new();
        collect_group(tree.root(), &mapping, &mut contours);
        Ok(Outline::new(contours))
    }
}

impl Default for SvgOutlineImporter {
    fn default() -> Self {
        Self::new(&IconMetrics::default())
    }
}

impl OutlineImporter for SvgOutlineImporter {
    fn import_outline(&self, resource: &Path) -> Result<Outline, ImportError> {
        let data = std::fs::read(resource)?;
        let outline = self.import_svg(&data)?;
        if outline.is_empty() {
            debug!("{} contains no filled paths", resource.display());
        }
        Ok(outline)
    }
}

/// Maps SVG user space onto font units
#[derive(Debug, Clone, Copy)]
struct SvgToFont {
    scale: f64,
    ascender: f64,
}

impl SvgToFont {
    fn map(&self, transform: &usvg::Transform, point: usvg::tiny_skia_path::Point) -> Point {
        let x = f64::from(transform.sx * point.x + transform.kx * point.y + transform.tx);
        let y = f64::from(transform.ky * point.x + transform.sy * point.y + transform.ty);
        Point::new(x * self.scale, self.ascender - y * self.scale)
    }
}

fn collect_group(group: &usvg::Group, mapping: &SvgToFont, contours: &mut Vec<BezPath>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(child) => collect_group(child, mapping, contours),
            usvg::Node::Path(path) => collect_path(path, mapping, contours),
            usvg::Node::Text(text) => collect_group(text.flattened(), mapping, contours),
            usvg::Node::Image(_) => debug!("Skipping embedded image"),
        }
    }
}

fn collect_path(path: &usvg::Path, mapping: &SvgToFont, contours: &mut Vec<BezPath>) {
    if !path.is_visible() {
        return;
    }
    if path.fill().is_none() {
        debug!("Skipping stroke-only path '{}'", path.id());
        return;
    }

    let transform = path.abs_transform();
    let mut current = BezPath::new();

    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                finish_contour(&mut current, contours);
                current.move_to(mapping.map(&transform, p));
            }
            PathSegment::LineTo(p) => current.line_to(mapping.map(&transform, p)),
            PathSegment::QuadTo(c, p) => {
                current.quad_to(mapping.map(&transform, c), mapping.map(&transform, p))
            }
            PathSegment::CubicTo(c1, c2, p) => current.curve_to(
                mapping.map(&transform, c1),
                mapping.map(&transform, c2),
                mapping.map(&transform, p),
            ),
            PathSegment::Close => finish_contour(&mut current, contours),
        }
    }
    finish_contour(&mut current, contours);
}

/// Push the contour under construction, closing it as SVG fills do
fn finish_contour(current: &mut BezPath, contours: &mut Vec<BezPath>) {
    let mut path = std::mem::take(current);
    // A bare move_to draws nothing
    if path.elements().len() < 2 {
        return;
    }
    path.close_path();
    contours.push(path);
}
