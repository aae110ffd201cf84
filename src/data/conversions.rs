//! UFO format conversion utilities
//!
//! Converts the assembled font document into the norad UFO model. Outlines
//! are kurbo paths; each closed subpath becomes one UFO contour.

use crate::font_source::{FontDocument, GlyphSlot, IconMetrics};
use kurbo::{BezPath, PathEl, Point};
use norad::{Contour, ContourPoint, Font, PointType};

/// Points closer than this are treated as the same position
const SAME_POINT_EPSILON: f64 = 1e-9;

impl FontDocument {
    /// Convert to a complete norad font, `.notdef` first
    pub fn to_norad_font(&self) -> Font {
        let mut font = Font::new();
        font.font_info = self.metrics.to_norad_font_info(&self.family_name);

        let layer = font.default_layer_mut();
        layer.insert_glyph(notdef_glyph(&self.metrics));
        for slot in self.slots() {
            layer.insert_glyph(slot.to_norad_glyph());
        }

        font
    }
}

impl GlyphSlot {
    pub fn to_norad_glyph(&self) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.advance_width;
        glyph.height = self.advance_height;
        glyph.codepoints.insert(self.code_point);
        glyph.contours = self
            .outline
            .contours
            .iter()
            .flat_map(bezpath_to_norad_contours)
            .collect();
        glyph
    }
}

fn notdef_glyph(metrics: &IconMetrics) -> norad::Glyph {
    let mut glyph = norad::Glyph::new(".notdef");
    glyph.width = metrics.advance_width;
    glyph.height = metrics.advance_height;
    glyph
}

/// Convert a kurbo path into closed UFO contours.
///
/// When a subpath ends on its starting point, the duplicate end point is
/// dropped and its type moves to the first point, which is how UFO encodes
/// the closing segment.
pub fn bezpath_to_norad_contours(path: &BezPath) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut points: Vec<ContourPoint> = Vec::new();

    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => {
                close_contour(&mut points, &mut contours);
                points.push(point(p, PointType::Line));
            }
            PathEl::LineTo(p) => points.push(point(p, PointType::Line)),
            PathEl::QuadTo(c, p) => {
                points.push(point(c, PointType::OffCurve));
                points.push(point(p, PointType::QCurve));
            }
            PathEl::CurveTo(c1, c2, p) => {
                points.push(point(c1, PointType::OffCurve));
                points.push(point(c2, PointType::OffCurve));
                points.push(point(p, PointType::Curve));
            }
            PathEl::ClosePath => close_contour(&mut points, &mut contours),
        }
    }
    close_contour(&mut points, &mut contours);

    contours
}

fn close_contour(points: &mut Vec<ContourPoint>, contours: &mut Vec<Contour>) {
    let mut points = std::mem::take(points);

    if points.len() > 1 {
        let first = (points[0].x, points[0].y);
        let last = &points[points.len() - 1];
        let returns_to_start = (last.x - first.0).abs() < SAME_POINT_EPSILON
            && (last.y - first.1).abs() < SAME_POINT_EPSILON;
        if returns_to_start && last.typ != PointType::OffCurve {
            if let Some(closing) = points.pop() {
                points[0].typ = closing.typ;
            }
        }
    }

    let on_curve = points
        .iter()
        .filter(|p| p.typ != PointType::OffCurve)
        .count();
    if on_curve < 2 {
        return;
    }

    contours.push(Contour::new(points, None));
}

fn point(p: Point, typ: PointType) -> ContourPoint {
    ContourPoint::new(p.x, p.y, typ, false, None, None)
}
