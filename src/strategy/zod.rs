//! Zod runtime schemas: one `const X = z.object({ ... })` per struct.
use serde_json::Value;

use super::{EmissionStrategy, js_literal, single_quoted};
use crate::diagnostic::Diagnostic;
use crate::schema::Primitive;

#[derive(Debug, Default)]
pub struct ZodStrategy;

impl ZodStrategy {
    pub fn new() -> Self {
        Self
    }
    fn native(primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "z.boolean()",
            Primitive::Integer => "z.number().int()",
            Primitive::String => "z.string()",
        }
    }
}

impl EmissionStrategy for ZodStrategy {
    fn preamble(&self) -> String {
        "import { z } from 'zod'\n\n".to_string()
    }

    fn field_scalar(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name}: {},\n", Self::native(primitive))
    }

    /// `z.enum` only takes strings; any other literal set falls back to
    /// `z.literal` / `z.union` of literals.
    fn field_enum(&mut self, name: &str, values: &[Value], diagnostics: &mut Vec<Diagnostic>) -> String {
        if values.iter().all(Value::is_string) {
            let elements = values
                .iter()
                .filter_map(Value::as_str)
                .map(single_quoted)
                .collect::<Vec<_>>();
            if elements.is_empty() {
                return format!("\t{name}: z.never(),\n");
            }
            return format!("\t{name}: z.enum([{}]),\n", elements.join(", "));
        }

        let mut literals = Vec::with_capacity(values.len());
        for value in values {
            match js_literal(value) {
                Some(lit) => literals.push(format!("z.literal({lit})")),
                None => diagnostics.push(Diagnostic::unsupported_literal(name, value, "zod")),
            }
        }
        match literals.len() {
            0 => format!("\t{name}: z.never(),\n"),
            1 => format!("\t{name}: {},\n", literals[0]),
            _ => format!("\t{name}: z.union([{}]),\n", literals.join(", ")),
        }
    }

    fn field_array(&self, name: &str, primitive: Primitive) -> String {
        format!("\t{name}: z.array({}),\n", Self::native(primitive))
    }

    fn struct_start(&self, name: &str) -> String {
        format!("const {name} = z.object({{\n")
    }

    fn field_ref(&self, name: &str, target_struct: &str) -> String {
        format!("\t{name}: {target_struct},\n")
    }

    fn struct_end(&self, _name: &str) -> String {
        "})\n\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_enum_uses_z_enum() {
        let mut s = ZodStrategy::new();
        let mut diags = Vec::new();
        let out = s.field_enum("wha", &[json!("uwu"), json!("owo"), json!("rawr")], &mut diags);
        assert_eq!(out, "\twha: z.enum(['uwu', 'owo', 'rawr']),\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn non_string_enum_uses_literals() {
        let mut s = ZodStrategy::new();
        let mut diags = Vec::new();
        assert_eq!(
            s.field_enum("n", &[json!(0), json!(3)], &mut diags),
            "\tn: z.union([z.literal(0), z.literal(3)]),\n"
        );
        assert_eq!(s.field_enum("b", &[json!(true)], &mut diags), "\tb: z.literal(true),\n");
        assert_eq!(s.field_enum("e", &[], &mut diags), "\te: z.never(),\n");
        assert!(diags.is_empty());

        assert_eq!(s.field_enum("m", &[json!(1), json!([2])], &mut diags), "\tm: z.literal(1),\n");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn fragments() {
        let s = ZodStrategy::new();
        assert_eq!(s.preamble(), "import { z } from 'zod'\n\n");
        assert_eq!(s.field_scalar("k", Primitive::Integer), "\tk: z.number().int(),\n");
        assert_eq!(s.field_array("k", Primitive::Boolean), "\tk: z.array(z.boolean()),\n");
        assert_eq!(s.field_ref("sub", "RootSub"), "\tsub: RootSub,\n");
        assert_eq!(s.struct_start("Root"), "const Root = z.object({\n");
        assert_eq!(s.struct_end("Root"), "})\n\n");
    }
}
