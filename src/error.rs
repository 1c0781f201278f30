use thiserror::Error;

/// Fatal failures of a single `convert` call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A scalar or array field declares a `type` outside {boolean, integer, string}.
    #[error("field `{field}`: unsupported primitive type `{found}`")]
    UnsupportedPrimitiveType { field: String, found: String },

    /// `convert` was asked for a target outside the closed target set.
    #[error("unsupported target `{0}` (expected one of: typescript, typescript-zod, go, python)")]
    UnsupportedTarget(String),

    /// Arrays of objects, arrays of arrays, arrays of enums, or arrays without `items`.
    #[error("field `{field}`: unsupported array items ({reason})")]
    UnsupportedArrayItems { field: String, reason: String },

    /// An `object` node without a `properties` mapping.
    #[error("field `{field}`: object has no `properties`")]
    MissingProperties { field: String },

    /// A non-fatal diagnostic promoted to an error by the caller.
    #[error("{count} diagnostic(s) denied, first: {first}")]
    DeniedDiagnostics { count: usize, first: String },
}

/// Failures while turning raw input text into a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("at JSON path {path} → {message}")]
    Parse { path: String, message: String },

    #[error("JSON pointer `{0}` does not resolve to a value")]
    PointerNotFound(String),
}
