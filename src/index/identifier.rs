//! QML property name rules

/// Property names the generated singleton already declares
pub const RESERVED_PROPERTIES: &[&str] = &["fontLoader", "fontFamily"];

/// JavaScript and QML keywords that cannot name a property
const KEYWORDS: &[&str] = &[
    "alias", "as", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "property", "protected", "public", "readonly", "required", "return",
    "signal", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var",
    "void", "while", "with", "yield",
];

/// Whether `key` can be used as `readonly property string <key>`
pub fn is_valid_property_name(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&key)
        && !RESERVED_PROPERTIES.contains(&key)
}
