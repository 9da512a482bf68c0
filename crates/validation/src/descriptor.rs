//! Field descriptors: name, predicate, and inert documentation metadata.

use serde_json::Value;
use validator::ValidateEmail;

use techcell_core::ViolationReason;

/// The rule a field value must satisfy.
///
/// Every predicate first requires a JSON string; `null` and absent values are
/// reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Any string, including `""`.
    IsString,
    /// A string with at least one character.
    NonEmpty,
    /// A syntactically valid email address.
    Email,
}

impl Predicate {
    /// Check a (possibly absent) value. `None` means the value passes.
    pub fn check(&self, value: Option<&Value>) -> Option<ViolationReason> {
        let s = match value {
            None | Some(Value::Null) => return Some(ViolationReason::Missing),
            Some(Value::String(s)) => s,
            Some(_) => return Some(ViolationReason::NotAString),
        };

        match self {
            Predicate::IsString => None,
            Predicate::NonEmpty if s.is_empty() => Some(ViolationReason::Empty),
            Predicate::NonEmpty => None,
            Predicate::Email if s.validate_email() => None,
            Predicate::Email => Some(ViolationReason::InvalidEmail),
        }
    }
}

/// One row of a record's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub predicate: Predicate,
    /// Documentation only.
    pub example: Option<&'static str>,
    /// Documentation only.
    pub description: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, predicate: Predicate) -> Self {
        Self {
            name,
            predicate,
            example: None,
            description: None,
        }
    }

    pub const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn check(&self, value: Option<&Value>) -> Option<ViolationReason> {
        self.predicate.check(value)
    }
}
