//! Non-fatal findings collected during one conversion.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An enum literal the target cannot represent; it was left out.
    UnsupportedEnumLiteralKind,
    /// A property with a missing or unknown `type`; no field was emitted.
    UnrecognizedFieldType,
    /// A synthesized name the target would reject; the declaration was left out.
    InvalidIdentifier,
    /// A synthesized name already declared in this output; the repeat was left out.
    NameCollision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub field: String,
    pub message: String,
}

impl Diagnostic {
    pub fn unsupported_literal(field: &str, literal: &serde_json::Value, target: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedEnumLiteralKind,
            field: field.to_string(),
            message: format!("enum literal {literal} is not supported by {target}, skipped"),
        }
    }
    pub fn invalid_identifier(field: &str, identifier: &str) -> Self {
        Self {
            kind: DiagnosticKind::InvalidIdentifier,
            field: field.to_string(),
            message: format!("`{identifier}` is not a valid identifier, skipped"),
        }
    }
    pub fn name_collision(field: &str, identifier: &str) -> Self {
        Self {
            kind: DiagnosticKind::NameCollision,
            field: field.to_string(),
            message: format!("`{identifier}` is already declared, skipped"),
        }
    }
    pub fn unrecognized_type(field: &str, type_label: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnrecognizedFieldType,
            field: field.to_string(),
            message: format!("type `{type_label}` is not recognized, field omitted"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field `{}`: {}", self.field, self.message)
    }
}
