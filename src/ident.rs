//! Identifier fragments for synthesized type and constant names.

/// Upper-case the first character, leave the rest untouched.
///
/// `"someObject"` → `"SomeObject"`, `"uwu"` → `"Uwu"`. Empty input stays empty.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Letter or `_` first, then letters, digits or `_` (Go's identifier rule).
pub fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}
