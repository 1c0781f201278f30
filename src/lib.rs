//! Translate a JSON-Schema-like object description into type declarations
//! for several target languages (TypeScript, Zod, Go).
//!
//! ```
//! use polystruct::{Polystruct, SchemaDocument};
//!
//! let schema = SchemaDocument::from_json_str(r#"{
//!     "properties": {
//!         "someBoolean": {"type": "boolean"},
//!         "someStringEnum": {"type": "string", "enum": ["a", "b", "c"]}
//!     }
//! }"#).unwrap();
//!
//! let ts = Polystruct::new(schema).convert("typescript").unwrap();
//! assert!(ts.text.starts_with("type Root = {"));
//! ```
pub mod cli;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod ident;
pub mod jq_exec;
pub mod path_de;
pub mod schema;
pub mod strategizer;
pub mod strategy;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use engine::{Polystruct, Target};
pub use error::{ConvertError, LoadError};
pub use schema::{Primitive, SchemaDocument, SchemaNode};
pub use strategizer::{Conversion, StructStrategizer};
pub use strategy::EmissionStrategy;
