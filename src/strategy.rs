//! Per-target emitters.
//!
//! The walker in [`crate::strategizer`] only ever talks to [`EmissionStrategy`];
//! every bit of target syntax lives in the submodules.
pub mod go;
pub mod typescript;
pub mod zod;

use serde_json::Value;

use crate::diagnostic::Diagnostic;
use crate::schema::Primitive;

pub use go::GoStrategy;
pub use typescript::TypeScriptStrategy;
pub use zod::ZodStrategy;

/// Text-producing callbacks, invoked in a fixed order by the walker:
/// `struct_start`, then one `field_*` per property, then `struct_end`,
/// and finally `preamble` once all structs are done.
pub trait EmissionStrategy {
    /// Emitted once, ahead of every struct fragment. May be empty.
    fn preamble(&self) -> String;

    fn field_scalar(&self, name: &str, primitive: Primitive) -> String;

    /// A field restricted to exactly `values`, in order.
    ///
    /// Literals the target cannot express are skipped and reported through
    /// `diagnostics` rather than failing the conversion.
    fn field_enum(&mut self, name: &str, values: &[Value], diagnostics: &mut Vec<Diagnostic>) -> String;

    fn field_array(&self, name: &str, primitive: Primitive) -> String;

    fn struct_start(&self, name: &str) -> String;

    /// A field typed by another emitted struct, by name.
    fn field_ref(&self, name: &str, target_struct: &str) -> String;

    fn struct_end(&self, name: &str) -> String;
}

// ————————————————————————————————————————————————————————————————————————————
// SHARED HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// `'text'` with backslashes and single quotes escaped.
pub(crate) fn single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Scalar JSON literal in a JS/TS expression position, `None` for arrays/objects.
pub(crate) fn js_literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(single_quoted(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
