use serde_json::Value;

use sundry_core::{DomainError, DomainResult};

/// Returned in place of an error when `to_lower_case` receives `null`.
pub const NULL_STRING_SENTINEL: &str = "Please provide a string";

const ABSENT_MESSAGE: &str = "Cannot read property 'toLowerCase' of undefined";

/// Lower-case `s`; non-alphabetic characters are kept as they are.
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Lower-case a loosely-typed value.
///
/// - string: lower-cased
/// - `null`: [`NULL_STRING_SENTINEL`]
/// - absent: [`DomainError::Type`]
/// - any other type: [`DomainError::Type`]
pub fn to_lower_case(value: Option<&Value>) -> DomainResult<String> {
    match value {
        Some(Value::String(s)) => Ok(lowercase(s)),
        Some(Value::Null) => Ok(NULL_STRING_SENTINEL.to_string()),
        None => Err(DomainError::type_error(ABSENT_MESSAGE)),
        Some(other) => Err(DomainError::type_error(format!(
            "expected a string, found {}",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
