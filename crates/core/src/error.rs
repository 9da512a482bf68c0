//! Boundary error model.

use serde::Serialize;
use thiserror::Error;

use crate::value_object::ValueObject;

/// Result type used by record validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Pseudo-field name used when the payload as a whole is unusable.
pub const BODY_FIELD: &str = "body";

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// The field is absent or `null`.
    Missing,
    /// The field is present but not a JSON string.
    NotAString,
    /// The field is an empty string where content is required.
    Empty,
    /// The field is not a syntactically valid email address.
    InvalidEmail,
    /// The field is not declared by the record.
    Unknown,
    /// The payload is not a JSON object (or could not be materialized).
    Malformed,
}

impl ViolationReason {
    pub fn message(&self) -> &'static str {
        match self {
            ViolationReason::Missing => "is required",
            ViolationReason::NotAString => "must be a string",
            ViolationReason::Empty => "should not be empty",
            ViolationReason::InvalidEmail => "must be an email",
            ViolationReason::Unknown => "is not allowed",
            ViolationReason::Malformed => "must be a JSON object",
        }
    }
}

impl core::fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// A single `(field, reason)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: ViolationReason,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: ViolationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    pub fn body(reason: ViolationReason) -> Self {
        Self::new(BODY_FIELD, reason)
    }
}

impl ValueObject for FieldViolation {}

impl core::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// A record failed one or more field predicates.
///
/// Always carries at least one violation; every failing field is listed, in
/// the order the record declares its fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} failed validation: {}", join(.violations))]
pub struct ValidationError {
    record: &'static str,
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error from collected violations.
    ///
    /// Returns `None` when nothing was violated, so callers can write
    /// `if let Some(err) = ValidationError::from_violations(..)`.
    pub fn from_violations(record: &'static str, violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { record, violations })
        }
    }

    pub fn single(record: &'static str, violation: FieldViolation) -> Self {
        Self {
            record,
            violations: vec![violation],
        }
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A string did not name any known order status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {value:?}")]
pub struct UnknownStatusError {
    value: String,
}

impl UnknownStatusError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }
}
