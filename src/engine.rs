//! Facade: one parsed schema, converted to any number of targets.
//!
//! Every conversion builds its own strategy and walker, so calls are
//! independent of each other and safe to run in parallel.
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::debug;

use crate::error::ConvertError;
use crate::schema::SchemaDocument;
use crate::strategizer::{Conversion, DEFAULT_ROOT_NAME, StructStrategizer};
use crate::strategy::{EmissionStrategy, GoStrategy, TypeScriptStrategy, ZodStrategy};

/// The closed set of output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Target {
    /// TypeScript structural type aliases
    #[value(name = "typescript")]
    TypeScript,
    /// Zod runtime validation schemas
    #[value(name = "typescript-zod")]
    TypeScriptZod,
    /// Go structs
    #[value(name = "go")]
    Go,
    /// Declared but not implemented yet; converts to an empty string
    #[value(name = "python")]
    Python,
}

#[derive(Debug, Clone)]
pub struct Polystruct {
    schema: SchemaDocument,
    root_name: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Target {
    pub const ALL: [Target; 4] = [Self::TypeScript, Self::TypeScriptZod, Self::Go, Self::Python];

    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::TypeScriptZod => "typescript-zod",
            Self::Go => "go",
            Self::Python => "python",
        }
    }
    /// Default output file name for this target.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::TypeScript => "struct.ts",
            Self::TypeScriptZod => "struct.zod.ts",
            Self::Go => "struct.go",
            Self::Python => "struct.py",
        }
    }
    /// Fresh emitter for one conversion; `None` for placeholder targets.
    fn strategy(self) -> Option<Box<dyn EmissionStrategy>> {
        match self {
            Self::TypeScript => Some(Box::new(TypeScriptStrategy::new())),
            Self::TypeScriptZod => Some(Box::new(ZodStrategy::new())),
            Self::Go => Some(Box::new(GoStrategy::new())),
            Self::Python => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = ConvertError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| ConvertError::UnsupportedTarget(s.to_string()))
    }
}

impl Polystruct {
    pub fn new(schema: SchemaDocument) -> Self {
        Self { schema, root_name: DEFAULT_ROOT_NAME.to_string() }
    }
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }
    /// Convert by target name; unknown names fail with [`ConvertError::UnsupportedTarget`].
    pub fn convert(&self, target: &str) -> Result<Conversion, ConvertError> {
        self.convert_target(target.parse()?)
    }
    pub fn convert_target(&self, target: Target) -> Result<Conversion, ConvertError> {
        let Some(strategy) = target.strategy() else {
            debug!(%target, "placeholder target, nothing to emit");
            return Ok(Conversion::default());
        };
        let properties = self
            .schema
            .properties
            .as_ref()
            .ok_or_else(|| ConvertError::MissingProperties { field: self.root_name.clone() })?;
        debug!(%target, root = %self.root_name, "converting");
        StructStrategizer::new(strategy).process(&self.root_name, properties)
    }
    /// Run several conversions in parallel; results keep the order of `targets`.
    pub fn convert_all(&self, targets: &[Target]) -> Vec<(Target, Result<Conversion, ConvertError>)> {
        targets
            .par_iter()
            .map(|&target| (target, self.convert_target(target)))
            .collect()
    }
}
