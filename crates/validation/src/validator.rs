//! The validation service.
//!
//! `RequestValidator` is constructed explicitly with its configuration and
//! handed to whoever decodes requests. It holds no state beyond that config.

use serde_json::{Map, Value};

use techcell_core::{FieldViolation, ValidationError, ValidationResult, ViolationReason};

use crate::config::ValidationConfig;
use crate::record::Record;

#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    config: ValidationConfig,
}

impl RequestValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate untrusted JSON and materialize the record.
    ///
    /// Every failing field is reported, in descriptor order, followed by any
    /// unknown keys when those are forbidden.
    pub fn validate<R: Record>(&self, input: &Value) -> ValidationResult<R> {
        let Some(object) = input.as_object() else {
            return Err(reject::<R>(vec![FieldViolation::body(ViolationReason::Malformed)]));
        };

        let violations = self.collect_violations::<R>(object);
        if let Some(err) = ValidationError::from_violations(R::NAME, violations) {
            tracing::debug!(
                record = R::NAME,
                violations = err.violations().len(),
                "request record rejected"
            );
            return Err(err);
        }

        let record = match self.declared_only::<R>(object) {
            Some(declared) => serde_json::from_value(Value::Object(declared)),
            None => serde_json::from_value(input.clone()),
        };
        record.map_err(|e| {
            tracing::warn!(record = R::NAME, error = %e, "validated record failed to materialize");
            reject::<R>(vec![FieldViolation::body(ViolationReason::Malformed)])
        })
    }

    /// Validate raw request bytes. Bytes that are not JSON are reported as a
    /// malformed body.
    pub fn validate_slice<R: Record>(&self, bytes: &[u8]) -> ValidationResult<R> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            tracing::debug!(record = R::NAME, error = %e, "request body is not JSON");
            ValidationError::single(R::NAME, FieldViolation::body(ViolationReason::Malformed))
        })?;
        self.validate(&value)
    }

    /// Re-check a record that was built in code rather than decoded.
    pub fn check<R: Record>(&self, record: &R) -> ValidationResult<()> {
        let value = serde_json::to_value(record)
            .map_err(|_| reject::<R>(vec![FieldViolation::body(ViolationReason::Malformed)]))?;
        self.validate::<R>(&value).map(|_| ())
    }

    fn collect_violations<R: Record>(&self, object: &Map<String, Value>) -> Vec<FieldViolation> {
        let mut violations: Vec<FieldViolation> = R::FIELDS
            .iter()
            .filter_map(|field| {
                field
                    .check(object.get(field.name))
                    .map(|reason| FieldViolation::new(field.name, reason))
            })
            .collect();

        if self.config.forbid_unknown_fields {
            let mut unknown: Vec<&String> = object
                .keys()
                .filter(|key| R::field(key).is_none())
                .collect();
            unknown.sort();
            violations.extend(
                unknown
                    .into_iter()
                    .map(|key| FieldViolation::new(key.as_str(), ViolationReason::Unknown)),
            );
        }

        violations
    }

    /// Strip undeclared keys before materializing, when any are present.
    fn declared_only<R: Record>(&self, object: &Map<String, Value>) -> Option<Map<String, Value>> {
        if object.keys().all(|key| R::field(key).is_some()) {
            return None;
        }
        Some(
            object
                .iter()
                .filter(|(key, _)| R::field(key).is_some())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

fn reject<R: Record>(violations: Vec<FieldViolation>) -> ValidationError {
    match ValidationError::from_violations(R::NAME, violations) {
        Some(err) => err,
        None => ValidationError::single(R::NAME, FieldViolation::body(ViolationReason::Malformed)),
    }
}
