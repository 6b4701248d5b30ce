//! Declarative schema validation for loosely-typed records.
//!
//! A [`Schema`] is a list of [`FieldRule`]s (field key → rules). Validating a
//! candidate yields either `Ok(())` or a [`ValidationErrors`] list whose
//! `Display` form is the JSON array of [`Violation`]s, so a caller holding only
//! the error message can still recover `violations[0].message`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One step of a violation path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

/// Human-readable label for a path: `name`, `tags[0]`, `a.b`, or `value` for the root.
pub fn label_for(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "value".to_string();
    }

    let mut label = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !label.is_empty() {
                    label.push('.');
                }
                label.push_str(key);
            }
            PathSegment::Index(index) => {
                label.push_str(&format!("[{index}]"));
            }
        }
    }
    label
}

/// Extra detail attached to a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationContext {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<PathSegment>,
}

/// A single rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub message: String,
    pub path: Vec<PathSegment>,
    /// Stable rule identifier (e.g. `string.base`, `number.min`).
    #[serde(rename = "type")]
    pub kind: String,
    pub context: ViolationContext,
}

impl Violation {
    pub fn new(kind: impl Into<String>, path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        let context = ViolationContext {
            label: label_for(&path),
            key: path.last().cloned(),
        };
        Self {
            message: message.into(),
            path,
            kind: kind.into(),
            context,
        }
    }
}

/// Non-empty list of violations produced by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn first(&self) -> Option<&Violation> {
        self.0.first()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON form of the violation list (the same text `Display` produces).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let json = self.to_json().map_err(|_| core::fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for ValidationErrors {}

/// Parse a serialized violation list (the message of a validation error).
pub fn parse_violations(message: &str) -> Result<Vec<Violation>, serde_json::Error> {
    serde_json::from_str(message)
}

/// A predicate applied to a single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be a JSON string.
    String,
    /// Value must be a JSON array.
    Array,
    /// Value must be a JSON number.
    Number,
    /// Numeric value must be `>= limit`. Non-numbers are left to [`Rule::Number`].
    Min(f64),
    /// Numeric value may carry at most this many decimal places.
    Precision(u32),
    /// Every array item must satisfy all the given rules.
    Items(Vec<Rule>),
}

impl Rule {
    fn check(&self, value: &Value, path: &[PathSegment]) -> Result<(), Violation> {
        let label = label_for(path);
        match self {
            Rule::String if !value.is_string() => Err(Violation::new(
                "string.base",
                path.to_vec(),
                format!("\"{label}\" must be a string"),
            )),
            Rule::Array if !value.is_array() => Err(Violation::new(
                "array.base",
                path.to_vec(),
                format!("\"{label}\" must be an array"),
            )),
            Rule::Number if !value.is_number() => Err(Violation::new(
                "number.base",
                path.to_vec(),
                format!("\"{label}\" must be a number"),
            )),
            Rule::Min(limit) => match value.as_f64() {
                Some(n) if n < *limit => Err(Violation::new(
                    "number.min",
                    path.to_vec(),
                    format!("\"{label}\" must be greater than or equal to {limit}"),
                )),
                _ => Ok(()),
            },
            Rule::Precision(places) => match value.as_f64() {
                Some(n) if !has_precision(n, *places) => Err(Violation::new(
                    "number.precision",
                    path.to_vec(),
                    format!("\"{label}\" must have no more than {places} decimal places"),
                )),
                _ => Ok(()),
            },
            Rule::Items(rules) => {
                let Some(items) = value.as_array() else {
                    return Ok(());
                };
                for (index, item) in items.iter().enumerate() {
                    let mut item_path = path.to_vec();
                    item_path.push(PathSegment::Index(index));
                    for rule in rules {
                        rule.check(item, &item_path)?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// `true` when `n` is representable with at most `places` decimal places.
///
/// Compares against the nearest double of the rounded decimal, so `18.95`
/// passes while `18.955` does not.
pub fn has_precision(n: f64, places: u32) -> bool {
    let scale = 10f64.powi(places as i32);
    let scaled = n * scale;
    scaled.is_finite() && (scaled.round() / scale) == n
}

/// Rules for one top-level key of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub key: &'static str,
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldRule {
    pub fn required(key: &'static str) -> Self {
        Self {
            key,
            required: true,
            rules: Vec::new(),
        }
    }

    pub fn optional(key: &'static str) -> Self {
        Self {
            key,
            required: false,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// First failing rule wins.
    fn check(&self, value: &Value) -> Result<(), Violation> {
        let path = [PathSegment::key(self.key)];
        for rule in &self.rules {
            rule.check(value, &path)?;
        }
        Ok(())
    }
}

/// Object schema: declared fields plus an unknown-key policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: Vec<FieldRule>,
    allow_unknown: bool,
}

impl Schema {
    pub fn object() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldRule) -> Self {
        self.fields.push(field);
        self
    }

    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Validate `candidate` and collect every violation.
    ///
    /// Declared fields are checked in declaration order, then unknown keys in
    /// map order.
    pub fn validate(&self, candidate: &Value) -> Result<(), ValidationErrors> {
        let Some(object) = candidate.as_object() else {
            return Err(ValidationErrors::new(vec![Violation::new(
                "object.base",
                Vec::new(),
                "\"value\" must be of type object",
            )]));
        };

        let violations = self.collect(object);
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "schema validation failed");
            Err(ValidationErrors::new(violations))
        }
    }

    fn collect(&self, object: &Map<String, Value>) -> Vec<Violation> {
        let mut violations = Vec::new();

        for field in &self.fields {
            match object.get(field.key) {
                Some(value) => {
                    if let Err(violation) = field.check(value) {
                        violations.push(violation);
                    }
                }
                None if field.required => violations.push(Violation::new(
                    "any.required",
                    vec![PathSegment::key(field.key)],
                    format!("\"{}\" is required", field.key),
                )),
                None => {}
            }
        }

        if !self.allow_unknown {
            for key in object.keys().filter(|k| !self.declares(k)) {
                violations.push(Violation::new(
                    "object.unknown",
                    vec![PathSegment::key(key.clone())],
                    format!("\"{key}\" is not allowed"),
                ));
            }
        }

        violations
    }
}
