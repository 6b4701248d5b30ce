//! Primitive helpers over loosely-typed values.
//!
//! Inputs are `serde_json::Value`s; an absent value (`None`) and an explicit
//! `null` are distinct, mirroring a missing field versus a `null` field.

pub mod dedup;
pub mod integer;
pub mod text;

pub use dedup::{remove_duplicates, remove_duplicates_by, remove_duplicates_value, DEDUP_ARGUMENT_MESSAGE};
pub use integer::is_integer;
pub use text::{lowercase, to_lower_case, NULL_STRING_SENTINEL};
