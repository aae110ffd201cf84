//! QML singleton rendering

use crate::index::IndexArtifact;
use std::fmt::Write;

const HEADER: &str = "\
/**
 * This file was generated by iconfont, please do not edit by hand
 */
pragma Singleton
import QtQuick 2.11
";

/// Render the artifact as a QML singleton
pub fn render(artifact: &IndexArtifact) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("QtObject {\n");
    out.push_str("    readonly property FontLoader fontLoader : FontLoader {\n");
    let _ = writeln!(
        out,
        "        source: \"{}\"",
        escape_string(&artifact.font_resource)
    );
    out.push_str("    }\n\n");
    let _ = writeln!(
        out,
        "    readonly property string fontFamily: \"{}\"",
        escape_string(&artifact.family_name)
    );
    out.push_str("\n    // Icons\n");
    for entry in &artifact.entries {
        let _ = writeln!(
            out,
            "    readonly property string {} : \"{}\"",
            entry.key,
            code_point_literal(entry.code_point)
        );
    }
    out.push_str("}\n");
    out
}

/// Escaped string literal for a BMP code point: backslash, `u`, four hex digits
pub fn code_point_literal(code_point: char) -> String {
    format!("\\u{:04X}", code_point as u32)
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
