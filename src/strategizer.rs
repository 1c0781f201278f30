//! The schema walker.
//!
//! Decomposes a properties tree into named struct fragments, driving an
//! [`EmissionStrategy`] for every piece of text. Nested objects get their own
//! struct, named by concatenating the capitalized ancestor chain
//! (`Root` → `RootSomeObject` → `RootSomeObjectSubobj`).
//!
//! Ordering: a child struct is pushed onto the output list while its parent
//! is still emitting fields, and the parent is pushed once it closes. Every
//! struct therefore appears after the structs it references, and the root
//! struct is always the last fragment.
use tracing::{debug, warn};

use crate::diagnostic::Diagnostic;
use crate::error::ConvertError;
use crate::ident::capitalize;
use crate::schema::{Kind, Primitive, Properties, SchemaNode};
use crate::strategy::EmissionStrategy;

pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Result of one successful walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Preamble followed by every struct fragment.
    pub text: String,
    /// The struct fragments alone, in emission order (root last).
    pub structs: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct StructStrategizer {
    strategy: Box<dyn EmissionStrategy>,
}

/// Owned state threaded through the recursion for one `process` call.
#[derive(Default)]
struct Accumulator {
    structs: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
    /// Promote any diagnostic to a fatal [`ConvertError::DeniedDiagnostics`].
    pub fn deny_diagnostics(self) -> Result<Self, ConvertError> {
        match self.diagnostics.first() {
            None => Ok(self),
            Some(first) => Err(ConvertError::DeniedDiagnostics {
                count: self.diagnostics.len(),
                first: first.to_string(),
            }),
        }
    }
}

impl StructStrategizer {
    pub fn new(strategy: Box<dyn EmissionStrategy>) -> Self {
        Self { strategy }
    }

    /// Walk the root properties map and assemble the final output.
    pub fn process(mut self, root_name: &str, properties: &Properties) -> Result<Conversion, ConvertError> {
        let mut acc = Accumulator::default();
        let root = self.create_struct(root_name, properties, &mut acc)?;
        acc.structs.push(root);

        // preamble last: strategies may have collected declarations during the walk
        let mut text = self.strategy.preamble();
        for fragment in &acc.structs {
            text.push_str(fragment);
        }
        Ok(Conversion { text, structs: acc.structs, diagnostics: acc.diagnostics })
    }

    fn create_struct(
        &mut self,
        name: &str,
        properties: &Properties,
        acc: &mut Accumulator,
    ) -> Result<String, ConvertError> {
        debug!(struct_name = name, fields = properties.len(), "emitting struct");
        let mut buf = self.strategy.struct_start(name);

        for (field, node) in properties {
            match node.kind() {
                Kind::Primitive(primitive) => {
                    let fragment = match &node.enum_ {
                        Some(values) => {
                            let seen = acc.diagnostics.len();
                            let fragment = self.strategy.field_enum(field, values, &mut acc.diagnostics);
                            for diagnostic in &acc.diagnostics[seen..] {
                                warn!(struct_name = name, %diagnostic, "enum field reported");
                            }
                            fragment
                        }
                        None => self.strategy.field_scalar(field, primitive),
                    };
                    buf.push_str(&fragment);
                }
                Kind::Array => {
                    let item = array_item_primitive(field, node)?;
                    buf.push_str(&self.strategy.field_array(field, item));
                }
                Kind::Object => {
                    let child_properties = node
                        .properties
                        .as_ref()
                        .ok_or_else(|| ConvertError::MissingProperties { field: field.clone() })?;
                    let child_name = format!("{}{}", capitalize(name), capitalize(field));
                    buf.push_str(&self.strategy.field_ref(field, &child_name));

                    let child = self.create_struct(&child_name, child_properties, acc)?;
                    acc.structs.push(child);
                }
                Kind::Unrecognized(_) => {
                    let diagnostic = Diagnostic::unrecognized_type(field, &node.type_label());
                    warn!(struct_name = name, %diagnostic, "field omitted");
                    acc.diagnostics.push(diagnostic);
                }
            }
        }

        buf.push_str(&self.strategy.struct_end(name));
        Ok(buf)
    }
}

/// Arrays carry exactly one primitive element type; anything richer fails fast.
fn array_item_primitive(field: &str, node: &SchemaNode) -> Result<Primitive, ConvertError> {
    let unsupported = |reason: &str| ConvertError::UnsupportedArrayItems {
        field: field.to_string(),
        reason: reason.to_string(),
    };
    let items = node.items.as_deref().ok_or_else(|| unsupported("missing `items`"))?;
    match items.kind() {
        Kind::Primitive(_) if items.enum_.is_some() => Err(unsupported("arrays of enums")),
        Kind::Primitive(primitive) => Ok(primitive),
        Kind::Object => Err(unsupported("arrays of objects")),
        Kind::Array => Err(unsupported("arrays of arrays")),
        Kind::Unrecognized(_) => Err(ConvertError::UnsupportedPrimitiveType {
            field: field.to_string(),
            found: items.type_label(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use crate::schema::SchemaDocument;
    use crate::strategy::{GoStrategy, TypeScriptStrategy};
    use serde_json::{Value, json};

    /// Records the callback sequence instead of producing real syntax.
    #[derive(Default)]
    struct Recorder;

    impl EmissionStrategy for Recorder {
        fn preamble(&self) -> String {
            "pre;".to_string()
        }
        fn field_scalar(&self, name: &str, primitive: Primitive) -> String {
            format!("scalar({name},{primitive});")
        }
        fn field_enum(&mut self, name: &str, values: &[Value], _: &mut Vec<Diagnostic>) -> String {
            format!("enum({name},{});", values.len())
        }
        fn field_array(&self, name: &str, primitive: Primitive) -> String {
            format!("array({name},{primitive});")
        }
        fn struct_start(&self, name: &str) -> String {
            format!("start({name});")
        }
        fn field_ref(&self, name: &str, target_struct: &str) -> String {
            format!("ref({name},{target_struct});")
        }
        fn struct_end(&self, name: &str) -> String {
            format!("end({name})|")
        }
    }

    fn props(value: Value) -> Properties {
        SchemaDocument::from_value(value).unwrap().properties.unwrap()
    }

    fn walk(strategy: Box<dyn EmissionStrategy>, value: Value) -> Result<Conversion, ConvertError> {
        StructStrategizer::new(strategy).process(DEFAULT_ROOT_NAME, &props(value))
    }

    #[test]
    fn primitive_only_schema_is_a_single_struct_in_property_order() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "c": {"type": "string"},
            "a": {"type": "boolean"},
            "b": {"type": "integer"},
            "d": {"type": "array", "items": {"type": "integer"}}
        }}))
        .unwrap();
        assert_eq!(out.structs.len(), 1);
        assert_eq!(
            out.text,
            "pre;start(Root);scalar(c,string);scalar(a,boolean);scalar(b,integer);array(d,integer);end(Root)|"
        );
    }

    #[test]
    fn child_struct_precedes_parent() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "before": {"type": "string"},
            "child": {"type": "object", "properties": {"x": {"type": "integer"}}},
            "after": {"type": "boolean"}
        }}))
        .unwrap();
        assert_eq!(out.structs.len(), 2);
        assert_eq!(out.structs[0], "start(RootChild);scalar(x,integer);end(RootChild)|");
        assert_eq!(
            out.structs[1],
            "start(Root);scalar(before,string);ref(child,RootChild);scalar(after,boolean);end(Root)|"
        );
    }

    #[test]
    fn nested_names_concatenate_ancestors() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "someObject": {"type": "object", "properties": {
                "subobj": {"type": "object", "properties": {"wha": {"type": "string", "enum": ["uwu"]}}}
            }}
        }}))
        .unwrap();
        let names: Vec<&str> = out
            .structs
            .iter()
            .map(|s| s.trim_start_matches("start(").split(')').next().unwrap())
            .collect();
        assert_eq!(names, ["RootSomeObjectSubobj", "RootSomeObject", "Root"]);
        assert!(out.structs[1].contains("ref(subobj,RootSomeObjectSubobj)"));
    }

    #[test]
    fn siblings_emit_in_discovery_order() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "first": {"type": "object", "properties": {
                "inner": {"type": "object", "properties": {}}
            }},
            "second": {"type": "object", "properties": {}}
        }}))
        .unwrap();
        let starts: Vec<&str> = out.structs.iter().map(|s| s.split(';').next().unwrap()).collect();
        assert_eq!(
            starts,
            ["start(RootFirstInner)", "start(RootFirst)", "start(RootSecond)", "start(Root)"]
        );
    }

    #[test]
    fn enums_route_to_field_enum_for_every_primitive() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "b": {"type": "boolean", "enum": [true]},
            "i": {"type": "integer", "enum": [0, 3]},
            "s": {"type": "string", "enum": ["a", "b", "c"]}
        }}))
        .unwrap();
        assert_eq!(out.text, "pre;start(Root);enum(b,1);enum(i,2);enum(s,3);end(Root)|");
    }

    #[test]
    fn unrecognized_types_are_omitted_with_a_diagnostic() {
        let out = walk(Box::new(Recorder), json!({"properties": {
            "n": {"type": "number"},
            "m": {},
            "s": {"type": "string"}
        }}))
        .unwrap();
        assert_eq!(out.text, "pre;start(Root);scalar(s,string);end(Root)|");
        assert_eq!(out.diagnostics.len(), 2);
        assert!(out.diagnostics.iter().all(|d| d.kind == DiagnosticKind::UnrecognizedFieldType));
        assert_eq!(out.diagnostics[0].field, "n");
    }

    #[test]
    fn unsupported_arrays_fail_fast() {
        let cases = [
            (json!({"type": "array"}), "missing"),
            (json!({"type": "array", "items": {"type": "object", "properties": {}}}), "objects"),
            (json!({"type": "array", "items": {"type": "array", "items": {"type": "string"}}}), "arrays"),
            (json!({"type": "array", "items": {"type": "string", "enum": ["a"]}}), "enums"),
        ];
        for (node, reason) in cases {
            let err = walk(Box::new(Recorder), json!({"properties": {"xs": node}})).unwrap_err();
            match err {
                ConvertError::UnsupportedArrayItems { field, reason: got } => {
                    assert_eq!(field, "xs");
                    assert!(got.contains(reason), "{got} should mention {reason}");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn non_primitive_array_items_are_unsupported_primitives() {
        let err = walk(
            Box::new(Recorder),
            json!({"properties": {"xs": {"type": "array", "items": {"type": "number"}}}}),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedPrimitiveType { field: "xs".into(), found: "number".into() }
        );
    }

    #[test]
    fn object_without_properties_fails() {
        let err = walk(Box::new(Recorder), json!({"properties": {"o": {"type": "object"}}})).unwrap_err();
        assert_eq!(err, ConvertError::MissingProperties { field: "o".into() });
    }

    #[test]
    fn custom_root_name() {
        let out = StructStrategizer::new(Box::new(TypeScriptStrategy::new()))
            .process("User", &props(json!({"properties": {
                "address": {"type": "object", "properties": {"zip": {"type": "string"}}}
            }})))
            .unwrap();
        assert_eq!(
            out.text,
            "type UserAddress = {\n\tzip: string\n}\n\ntype User = {\n\taddress: UserAddress\n}\n\n"
        );
    }

    #[test]
    fn strategy_diagnostics_reach_the_conversion() {
        let out = walk(Box::new(GoStrategy::new()), json!({"properties": {
            "nested": {"type": "object", "properties": {
                "level": {"type": "integer", "enum": [1, 2]}
            }}
        }}))
        .unwrap();
        assert_eq!(out.diagnostics.len(), 2);
        assert!(out.diagnostics.iter().all(|d| d.kind == DiagnosticKind::UnsupportedEnumLiteralKind));
        assert!(out.diagnostics.iter().all(|d| d.field == "level"));
    }

    #[test]
    fn denying_diagnostics() {
        let clean = walk(Box::new(Recorder), json!({"properties": {"s": {"type": "string"}}})).unwrap();
        assert_eq!(clean.clone().deny_diagnostics().unwrap(), clean);

        let noisy = walk(Box::new(Recorder), json!({"properties": {"a": {}, "b": {"type": "number"}}})).unwrap();
        match noisy.deny_diagnostics().unwrap_err() {
            ConvertError::DeniedDiagnostics { count, first } => {
                assert_eq!(count, 2);
                assert!(first.starts_with("field `a`"), "{first}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
