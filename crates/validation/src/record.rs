use serde::{Serialize, de::DeserializeOwned};

use techcell_core::ValueObject;

use crate::descriptor::FieldDescriptor;

/// A flat request record described by a descriptor table.
///
/// Field names in `FIELDS` must match the serde (wire) names of the struct.
pub trait Record: ValueObject + Serialize + DeserializeOwned {
    /// Record name used in errors and documentation.
    const NAME: &'static str;

    /// Declared fields, in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}
