//! `sundry-core` — shared error model and declarative validation.
//!
//! This crate contains **pure** building blocks (no IO).

pub mod error;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use validation::{
    has_precision, parse_violations, FieldRule, PathSegment, Rule, Schema, ValidationErrors, Violation,
    ViolationContext,
};
