use serde_json::Value;

/// `true` iff `value` is a number with no fractional part.
///
/// Strings, booleans, `null`, containers and absent values are never integers,
/// even when they look numeric (`"1"` is not an integer).
pub fn is_integer(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => {
            n.is_i64()
                || n.is_u64()
                || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}
