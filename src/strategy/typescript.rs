//! Structural TypeScript: one `type X = { ... }` alias per struct.
use serde_json::Value;

use super::{EmissionStrategy, js_literal};
use crate::diagnostic::Diagnostic;
use crate::schema::Primitive;

#[derive(Debug, Default)]
pub struct TypeScriptStrategy;

impl TypeScriptStrategy {
    pub fn new() -> Self {
        Self
    }
    fn native(primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "boolean",
            Primitive::Integer => "number",
            Primitive::String => "string",
        }
    }
}

impl EmissionStrategy for TypeScriptStrategy {
    fn preamble(&self) -> String {
        String::new()
    }

    fn field_scalar(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name}: {}\n", Self::native(primitive))
    }

    fn field_enum(&mut self, name: &str, values: &[Value], diagnostics: &mut Vec<Diagnostic>) -> String {
        let mut arms = Vec::with_capacity(values.len());
        for value in values {
            match js_literal(value) {
                Some(lit) => arms.push(lit),
                None => diagnostics.push(Diagnostic::unsupported_literal(name, value, "typescript")),
            }
        }
        if arms.is_empty() {
            return format!("\t{name}: never\n");
        }
        format!("\t{name}: {}\n", arms.join(" | "))
    }

    fn field_array(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name}: Array<{}>\n", Self::native(primitive))
    }

    fn struct_start(&self, name: &str) -> String {
        format!("type {name} = {{\n")
    }

    fn field_ref(&self, name: &str, target_struct: &str) -> String {
        format!("\t{name}: {target_struct}\n")
    }

    fn struct_end(&self, _name: &str) -> String {
        "}\n\n".to_string()
    }
}
