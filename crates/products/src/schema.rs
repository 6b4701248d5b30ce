use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sundry_core::{DomainError, DomainResult, FieldRule, Rule, Schema};

use crate::product::{NewProduct, Price};

static PRODUCT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::object()
        .field(FieldRule::required("name").rule(Rule::String))
        .field(FieldRule::required("description").rule(Rule::String))
        .field(
            FieldRule::required("tags")
                .rule(Rule::Array)
                .rule(Rule::Items(vec![Rule::String])),
        )
        .field(
            FieldRule::required("price")
                .rule(Rule::Number)
                .rule(Rule::Min(0.0))
                .rule(Rule::Precision(2)),
        )
});

/// Schema every product candidate must satisfy.
///
/// `id` is deliberately undeclared: a client-supplied id is an unknown key and
/// is reported as `"id" is not allowed`.
pub fn product_schema() -> &'static Schema {
    &PRODUCT_SCHEMA
}

/// Typed candidate for callers building a product in Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price: f64,
    /// Never accepted; present so a client-supplied id can be expressed (and rejected).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Validate a candidate record and build a [`NewProduct`].
///
/// On failure returns [`DomainError::Validation`] carrying every violation;
/// its message is the JSON array of `{message, path, type, context}` entries.
pub fn create_product(candidate: &Value) -> DomainResult<NewProduct> {
    if let Err(errors) = product_schema().validate(candidate) {
        tracing::debug!(violations = %errors, "product candidate rejected");
        return Err(DomainError::validation(errors));
    }

    let input = ProductInput::deserialize(candidate).map_err(|e| DomainError::type_error(e.to_string()))?;
    let price = Price::new(input.price)?;

    Ok(NewProduct::new(input.name, input.description, input.tags, price))
}

/// [`create_product`] for any serializable candidate.
pub fn create_product_from<T: Serialize>(candidate: &T) -> DomainResult<NewProduct> {
    let value = serde_json::to_value(candidate).map_err(|e| DomainError::type_error(e.to_string()))?;
    create_product(&value)
}
