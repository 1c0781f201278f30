//! Input model: the JSON-Schema-like description the engine walks.
//!
//! Only the handful of keywords the walker understands are modelled
//! (`type`, `enum`, `items`, `properties`); everything else in the
//! document (`title`, `description`, `$schema`, ...) is ignored.
//!
//! `type` is kept as a raw JSON value so an unknown or non-string
//! discriminator reaches the walker instead of failing the whole load.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

/// Property name → child node, in document order.
pub type Properties = IndexMap<String, SchemaNode>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default)]
    pub type_: Option<Value>,
    #[serde(rename = "enum", default)]
    pub enum_: Option<Vec<Value>>,
    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

/// The root mapping handed to the engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub properties: Option<Properties>,
}

/// The three leaf kinds every target knows how to spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Integer,
    String,
}

/// What a node's `type` discriminator resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    Primitive(Primitive),
    Array,
    Object,
    /// Missing `type`, or a value outside the five recognized kinds.
    Unrecognized(Option<&'a Value>),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Primitive {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "string" => Some(Self::String),
            _ => None,
        }
    }
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SchemaNode {
    pub fn kind(&self) -> Kind<'_> {
        let name = self.type_.as_ref().and_then(Value::as_str);
        match name {
            Some("array") => Kind::Array,
            Some("object") => Kind::Object,
            Some(other) => match Primitive::from_type_name(other) {
                Some(primitive) => Kind::Primitive(primitive),
                None => Kind::Unrecognized(self.type_.as_ref()),
            },
            None => Kind::Unrecognized(self.type_.as_ref()),
        }
    }
    /// Human-readable rendering of the raw `type` value for messages.
    pub fn type_label(&self) -> String {
        match &self.type_ {
            None => "<missing>".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl SchemaDocument {
    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        crate::path_de::from_str_with_path(src)
    }
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        crate::path_de::from_value_with_path(value)
    }
    /// Pick the schema out of a larger document first (e.g. `/components/schemas/User`).
    pub fn from_value_at(mut value: Value, json_pointer: &str) -> Result<Self, LoadError> {
        let selected = value
            .pointer_mut(json_pointer)
            .map(Value::take)
            .ok_or_else(|| LoadError::PointerNotFound(json_pointer.to_string()))?;
        Self::from_value(selected)
    }
}
