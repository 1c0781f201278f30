use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LoadError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_load_error)
}

/// Same as [`from_str_with_path`] for an already parsed tree (e.g. a jq result).
pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, LoadError> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(into_load_error)
}

fn into_load_error<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> LoadError {
    let path = err.path().to_string();
    LoadError::Parse { path, message: err.into_inner().to_string() }
}
