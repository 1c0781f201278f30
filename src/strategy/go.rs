//! Go structs.
//!
//! Enums become a dedicated named string type plus one constant per value,
//! so the field type carries the legal value set. Those type blocks are
//! collected while the walk runs and emitted as part of the preamble,
//! right after the `package` clause.
//!
//! Names are not made unique: a second enum field with the same name, or a
//! constant whose capitalized value is taken or is not a Go identifier, is
//! left out and reported as a diagnostic so the emitted file still compiles.
use std::collections::HashSet;

use serde_json::Value;

use super::EmissionStrategy;
use crate::diagnostic::Diagnostic;
use crate::ident::{capitalize, is_identifier};
use crate::schema::Primitive;

#[derive(Debug, Default)]
pub struct GoStrategy {
    enum_blocks: Vec<String>,
    enum_types: HashSet<String>,
    constants: HashSet<String>,
}

impl GoStrategy {
    pub fn new() -> Self {
        Self::default()
    }
    fn native(primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "bool",
            Primitive::Integer => "int",
            Primitive::String => "string",
        }
    }
    fn enum_type_name(field: &str) -> String {
        format!("{field}Struct")
    }
}

impl EmissionStrategy for GoStrategy {
    fn preamble(&self) -> String {
        let mut out = String::from("package main\n\n");
        for block in &self.enum_blocks {
            out.push_str(block);
        }
        out
    }

    fn field_scalar(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name} {}\n", Self::native(primitive))
    }

    fn field_enum(&mut self, name: &str, values: &[Value], diagnostics: &mut Vec<Diagnostic>) -> String {
        let enum_name = Self::enum_type_name(name);
        let field = format!("\t{name} {enum_name}\n");
        if !self.enum_types.insert(enum_name.clone()) {
            diagnostics.push(Diagnostic::name_collision(name, &enum_name));
            return field;
        }

        let mut block = format!("type {enum_name} string\n\nconst (\n");
        for value in values {
            let Value::String(s) = value else {
                diagnostics.push(Diagnostic::unsupported_literal(name, value, "go"));
                continue;
            };
            let constant = capitalize(s);
            if !is_identifier(&constant) {
                diagnostics.push(Diagnostic::invalid_identifier(name, &constant));
            } else if !self.constants.insert(constant.clone()) {
                diagnostics.push(Diagnostic::name_collision(name, &constant));
            } else {
                // `value` displays as a quoted, escaped JSON string, which Go accepts
                block.push_str(&format!("\t{constant} {enum_name} = {value}\n"));
            }
        }
        block.push_str(")\n\n");
        self.enum_blocks.push(block);

        field
    }

    fn field_array(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name} []{}\n", Self::native(primitive))
    }

    fn struct_start(&self, name: &str) -> String {
        format!("type {name} struct {{\n")
    }

    fn field_ref(&self, name: &str, target_struct: &str) -> String {
        format!("\t{name} {target_struct}\n")
    }

    fn struct_end(&self, _name: &str) -> String {
        "}\n\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use serde_json::json;

    #[test]
    fn enum_synthesizes_type_and_constants() {
        let mut s = GoStrategy::new();
        let mut diags = Vec::new();
        let field = s.field_enum("wha", &[json!("uwu"), json!("owo")], &mut diags);
        assert_eq!(field, "\twha whaStruct\n");
        assert!(diags.is_empty());
        assert_eq!(
            s.preamble(),
            "package main\n\ntype whaStruct string\n\nconst (\n\tUwu whaStruct = \"uwu\"\n\tOwo whaStruct = \"owo\"\n)\n\n"
        );
    }

    #[test]
    fn non_string_literals_are_skipped_with_diagnostic() {
        let mut s = GoStrategy::new();
        let mut diags = Vec::new();
        let field = s.field_enum("level", &[json!(0), json!("high"), json!(true)], &mut diags);
        assert_eq!(field, "\tlevel levelStruct\n");
        assert_eq!(diags.len(), 2);
        assert!(s.preamble().contains("\tHigh levelStruct = \"high\"\n"));
        assert!(!s.preamble().contains("= 0"));
    }

    #[test]
    fn fragments() {
        let s = GoStrategy::new();
        assert_eq!(s.preamble(), "package main\n\n");
        assert_eq!(s.field_scalar("someInteger", Primitive::Integer), "\tsomeInteger int\n");
        assert_eq!(s.field_array("xs", Primitive::Boolean), "\txs []bool\n");
        assert_eq!(s.field_ref("subobj", "RootSomeObjectSubobj"), "\tsubobj RootSomeObjectSubobj\n");
        assert_eq!(s.struct_start("Root"), "type Root struct {\n");
        assert_eq!(s.struct_end("Root"), "}\n\n");
    }

    #[test]
    fn constants_that_are_not_identifiers_are_reported() {
        let mut s = GoStrategy::new();
        let mut diags = Vec::new();
        s.field_enum("a", &[json!(""), json!("x-y"), json!("1st"), json!("ok")], &mut diags);
        assert_eq!(
            s.preamble(),
            "package main\n\ntype aStruct string\n\nconst (\n\tOk aStruct = \"ok\"\n)\n\n"
        );
        assert_eq!(diags.len(), 3);
        assert!(diags.iter().all(|d| d.kind == DiagnosticKind::InvalidIdentifier));
    }

    #[test]
    fn repeated_enum_names_are_declared_once() {
        let mut s = GoStrategy::new();
        let mut diags = Vec::new();
        let outer = s.field_enum("a", &[json!("x")], &mut diags);
        let inner = s.field_enum("a", &[json!("y")], &mut diags);
        let other = s.field_enum("b", &[json!("x")], &mut diags);
        assert_eq!(outer, inner);
        assert_eq!(other, "\tb bStruct\n");

        let preamble = s.preamble();
        assert_eq!(preamble.matches("type aStruct string").count(), 1);
        assert!(!preamble.contains("\"y\""));
        // `X` is already taken by aStruct
        assert!(preamble.contains("type bStruct string\n\nconst (\n)\n\n"));
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.kind == DiagnosticKind::NameCollision));
    }
}
