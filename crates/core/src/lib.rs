//! `techcell-core` — shared building blocks for the request boundary.
//!
//! This crate contains **pure** types (no IO, no HTTP): the error model used
//! by validation and status parsing, and the value-object marker.

pub mod error;
pub mod value_object;

pub use error::{
    FieldViolation, UnknownStatusError, ValidationError, ValidationResult, ViolationReason,
};
pub use value_object::ValueObject;
