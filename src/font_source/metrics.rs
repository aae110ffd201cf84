//! Font metrics for icon fonts
//!
//! Icons occupy the whole em square: baseline at 0, ascender at the top of
//! the em, no descender and no line gap. Every glyph advances by one em in
//! both directions.

use norad::fontinfo::NonNegativeIntegerOrFloat;

/// Bit 7 of OS/2 fsSelection
const USE_TYPO_METRICS_BIT: u8 = 7;

/// Creation date written into the head table, pinned for reproducible output
const HEAD_CREATED: &str = "2000/01/01 00:00:00";

/// Font-wide metrics applied to every generated font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMetrics {
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub line_gap: f64,
    /// Horizontal advance of every glyph
    pub advance_width: f64,
    /// Vertical advance of every glyph
    pub advance_height: f64,
    pub use_typo_metrics: bool,
    pub vertical_metrics: bool,
}

impl Default for IconMetrics {
    fn default() -> Self {
        Self::ICON
    }
}

impl IconMetrics {
    pub const ICON: IconMetrics = IconMetrics {
        units_per_em: 1024.0,
        ascender: 1024.0,
        descender: 0.0,
        line_gap: 0.0,
        advance_width: 1024.0,
        advance_height: 1024.0,
        use_typo_metrics: true,
        vertical_metrics: true,
    };

    /// Build the norad font info carrying these metrics
    pub fn to_norad_font_info(&self, family_name: &str) -> norad::FontInfo {
        let mut info = norad::FontInfo::default();

        info.family_name = Some(family_name.to_string());
        info.style_name = Some("Regular".to_string());
        info.postscript_font_name = Some(postscript_name(family_name));
        info.open_type_head_created = Some(HEAD_CREATED.to_string());

        info.units_per_em = NonNegativeIntegerOrFloat::new(self.units_per_em);
        info.ascender = Some(self.ascender);
        info.descender = Some(self.descender);
        info.cap_height = Some(self.ascender);
        info.postscript_underline_position = Some(0.0);

        let ascender = self.ascender.round() as i32;
        let descender = self.descender.round() as i32;
        let line_gap = self.line_gap.round() as i32;

        info.open_type_hhea_ascender = Some(ascender);
        info.open_type_hhea_descender = Some(descender);
        info.open_type_hhea_line_gap = Some(line_gap);

        info.open_type_os2_typo_ascender = Some(ascender);
        info.open_type_os2_typo_descender = Some(descender);
        info.open_type_os2_typo_line_gap = Some(line_gap);
        info.open_type_os2_win_ascent = Some(ascender.unsigned_abs());
        info.open_type_os2_win_descent = Some(descender.unsigned_abs());
        if self.use_typo_metrics {
            info.open_type_os2_selection = Some(vec![USE_TYPO_METRICS_BIT]);
        }

        if self.vertical_metrics {
            info.open_type_vhea_vert_typo_ascender = Some(ascender);
            info.open_type_vhea_vert_typo_descender = Some(descender);
            info.open_type_vhea_vert_typo_line_gap = Some(line_gap);
        }

        info
    }
}

/// PostScript names are limited to printable ASCII without spaces
fn postscript_name(family_name: &str) -> String {
    let name: String = family_name
        .chars()
        .filter(|c| c.is_ascii_graphic() && !"[](){}<>/%".contains(*c))
        .take(63)
        .collect();
    if name.is_empty() {
        "IconFont".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_metrics_fill_the_em_square() {
        let metrics = IconMetrics::default();
        assert_eq!(metrics.units_per_em, 1024.0);
        assert_eq!(metrics.ascender - metrics.descender, metrics.units_per_em);
        assert_eq!(metrics.advance_width, metrics.advance_height);
    }

    #[test]
    fn font_info_carries_line_metrics() {
        let info = IconMetrics::ICON.to_norad_font_info("VLC Icons");

        assert_eq!(info.family_name.as_deref(), Some("VLC Icons"));
        assert_eq!(info.postscript_font_name.as_deref(), Some("VLCIcons"));
        assert_eq!(info.ascender, Some(1024.0));
        assert_eq!(info.descender, Some(0.0));
        assert_eq!(info.open_type_hhea_line_gap, Some(0));
        assert_eq!(info.open_type_os2_typo_ascender, Some(1024));
        assert_eq!(info.open_type_os2_win_descent, Some(0));
        assert_eq!(info.open_type_os2_selection, Some(vec![7]));
        assert_eq!(info.open_type_vhea_vert_typo_ascender, Some(1024));
    }

    #[test]
    fn postscript_name_falls_back_when_empty() {
        assert_eq!(postscript_name("   "), "IconFont");
    }
}
