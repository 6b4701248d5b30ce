use serde_json::Value;

use sundry_core::{DomainError, DomainResult};

/// Error message for a missing or non-array argument.
pub const DEDUP_ARGUMENT_MESSAGE: &str = "please provide an array of numbers or strings";

/// Distinct elements of `items`, each kept once at its first position.
///
/// Equality is `PartialEq`, so for floats `NaN` entries are never merged.
/// Callers with "maybe missing" elements can use `Option<T>`: `None` stays
/// distinct from every present value, including `Value::Null`.
pub fn remove_duplicates<T: PartialEq + Clone>(items: Option<&[T]>) -> DomainResult<Vec<T>> {
    remove_duplicates_by(items, |a, b| a == b)
}

/// Same as [`remove_duplicates`] with a caller-supplied equality.
pub fn remove_duplicates_by<T, F>(items: Option<&[T]>, same: F) -> DomainResult<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let items = items.ok_or_else(|| DomainError::invalid_argument(DEDUP_ARGUMENT_MESSAGE))?;

    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|seen| same(seen, item)) {
            unique.push(item.clone());
        }
    }

    tracing::trace!(input = items.len(), output = unique.len(), "removed duplicates");
    Ok(unique)
}

/// Deduplicate a loosely-typed array.
///
/// Numbers compare by numeric value (`1` and `1.0` are the same element).
/// Absent, `null`, or any non-array argument is rejected.
pub fn remove_duplicates_value(value: Option<&Value>) -> DomainResult<Vec<Value>> {
    match value {
        Some(Value::Array(items)) => remove_duplicates_by(Some(items.as_slice()), same_value),
        _ => Err(DomainError::invalid_argument(DEDUP_ARGUMENT_MESSAGE)),
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}
