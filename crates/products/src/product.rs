use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use sundry_core::{
    has_precision, DomainError, DomainResult, PathSegment, ValidationErrors, Violation,
};

/// Numeric product identifier, assigned by the system (never by the client).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Non-negative price with at most two decimal places, held in cents.
///
/// Written on the wire as a two-decimal string (`"18.95"`) and read back from
/// either a JSON number or a numeric string. `-0.0` is stored as zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

/// Largest amount in cents that survives the trip through `f64` exactly.
const MAX_CENTS: u64 = (1 << 53) - 1;

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(price_violation("number.base", "\"price\" must be a number"));
        }
        if value < 0.0 {
            return Err(price_violation(
                "number.min",
                "\"price\" must be greater than or equal to 0",
            ));
        }
        if !has_precision(value, 2) {
            return Err(price_violation(
                "number.precision",
                "\"price\" must have no more than 2 decimal places",
            ));
        }

        let cents = (value * 100.0).round();
        if cents > MAX_CENTS as f64 {
            return Err(price_violation("number.unsafe", "\"price\" must be a safe number"));
        }
        Ok(Self(cents as u64))
    }

    /// Price from an amount in the smallest currency unit.
    pub fn from_cents(cents: u32) -> Self {
        Self(u64::from(cents))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

fn price_violation(kind: &str, message: &str) -> DomainError {
    DomainError::validation(ValidationErrors::new(vec![Violation::new(
        kind,
        vec![PathSegment::key("price")],
        message,
    )]))
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
        }

        let value = match Wire::deserialize(deserializer)? {
            Wire::Number(n) => n,
            Wire::Text(s) => s.trim().parse::<f64>().map_err(D::Error::custom)?,
        };
        Price::new(value).map_err(D::Error::custom)
    }
}

/// A validated product that has not been assigned an id yet.
///
/// Only obtainable through the product schema (see [`crate::create_product`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    name: String,
    description: String,
    tags: Vec<String>,
    price: Price,
}

impl NewProduct {
    pub(crate) fn new(name: String, description: String, tags: Vec<String>, price: Price) -> Self {
        Self {
            name,
            description,
            tags,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Attach a system-assigned id.
    pub fn assign_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            price: self.price,
        }
    }
}

/// A validated product with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    tags: Vec<String>,
    price: Price,
}

impl Product {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn price(&self) -> Price {
        self.price
    }
}
