//! OpenAPI-style schema rendering from descriptor tables.
//!
//! Purely documentation: nothing here feeds back into validation.

use serde_json::{Map, Value, json};

use techcell_orders::OrderStatus;

use crate::descriptor::{FieldDescriptor, Predicate};
use crate::record::Record;

/// Object schema for a record: every declared field is required.
pub fn record_schema<R: Record>() -> Value {
    let properties: Map<String, Value> = R::FIELDS
        .iter()
        .map(|field| (field.name.to_string(), field_schema(field)))
        .collect();
    let required: Vec<&str> = R::FIELDS.iter().map(|f| f.name).collect();

    json!({
        "title": R::NAME,
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

/// String-enum schema listing the order status literals.
pub fn order_status_schema() -> Value {
    json!({
        "title": "OrderStatus",
        "type": "string",
        "enum": OrderStatus::literals().collect::<Vec<_>>(),
    })
}

fn field_schema(field: &FieldDescriptor) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), json!("string"));

    match field.predicate {
        Predicate::Email => {
            schema.insert("format".into(), json!("email"));
        }
        Predicate::NonEmpty => {
            schema.insert("minLength".into(), json!(1));
        }
        Predicate::IsString => {}
    }

    if let Some(example) = field.example {
        schema.insert("example".into(), json!(example));
    }
    if let Some(description) = field.description {
        schema.insert("description".into(), json!(description));
    }

    Value::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CancelOrderRequest, ConfirmEmailRequest, ResendConfirmEmailRequest};

    #[test]
    fn email_field_has_format_and_example() {
        let schema = record_schema::<ResendConfirmEmailRequest>();
        assert_eq!(
            schema,
            json!({
                "title": "ResendConfirmEmailRequest",
                "type": "object",
                "required": ["email"],
                "properties": {
                    "email": {
                        "type": "string",
                        "format": "email",
                        "example": "test1@techcell.cloud",
                    }
                }
            })
        );
    }

    #[test]
    fn non_empty_field_has_min_length() {
        let schema = record_schema::<ConfirmEmailRequest>();
        assert_eq!(schema["properties"]["hash"]["minLength"], json!(1));
    }

    #[test]
    fn plain_string_field_carries_description() {
        let schema = record_schema::<CancelOrderRequest>();
        let reason = &schema["properties"]["reason"];
        assert!(reason.get("minLength").is_none());
        assert_eq!(reason["description"], json!("Why the order is being canceled"));
    }

    #[test]
    fn status_schema_lists_all_literals() {
        assert_eq!(
            order_status_schema()["enum"],
            json!(["pending", "preparing", "shipping", "completed", "canceled", "failed"])
        );
    }
}
