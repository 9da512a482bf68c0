//! Concrete request records.
//!
//! Construct these through [`crate::RequestValidator`]; the public fields are
//! for reading once a record has passed validation.

use serde::{Deserialize, Serialize};

use techcell_core::ValueObject;

use crate::descriptor::{FieldDescriptor, Predicate};
use crate::record::Record;

/// Login through an external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginWithProviderRequest {
    pub access_token: String,
}

impl ValueObject for LoginWithProviderRequest {}

impl Record for LoginWithProviderRequest {
    const NAME: &'static str = "LoginWithProviderRequest";
    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::new(
        "accessToken",
        Predicate::NonEmpty,
    )
    .example("ya29.a0AfH6SMBx3example")
    .description("Access token issued by the external identity provider")];
}

/// Cancel an order, with a free-form reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub reason: String,
}

impl ValueObject for CancelOrderRequest {}

impl Record for CancelOrderRequest {
    const NAME: &'static str = "CancelOrderRequest";
    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::new(
        "reason",
        Predicate::IsString,
    )
    .example("out of stock")
    .description("Why the order is being canceled")];
}

/// Confirm an email address with the opaque token sent to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmEmailRequest {
    pub hash: String,
}

impl ValueObject for ConfirmEmailRequest {}

impl Record for ConfirmEmailRequest {
    const NAME: &'static str = "ConfirmEmailRequest";
    const FIELDS: &'static [FieldDescriptor] =
        &[FieldDescriptor::new("hash", Predicate::NonEmpty).example("somehash123")];
}

/// Ask for the confirmation email to be sent again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendConfirmEmailRequest {
    pub email: String,
}

impl ValueObject for ResendConfirmEmailRequest {}

impl Record for ResendConfirmEmailRequest {
    const NAME: &'static str = "ResendConfirmEmailRequest";
    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::new(
        "email",
        Predicate::Email,
    )
    .example("test1@techcell.cloud")];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_keys<R: Record>(sample: &R) -> Vec<String> {
        let value = serde_json::to_value(sample).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn declared_names<R: Record>() -> Vec<String> {
        let mut names: Vec<_> = R::FIELDS.iter().map(|f| f.name.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn descriptor_names_match_wire_keys() {
        let login = LoginWithProviderRequest {
            access_token: "abc".into(),
        };
        assert_eq!(wire_keys(&login), declared_names::<LoginWithProviderRequest>());
        assert_eq!(wire_keys(&login), ["accessToken"]);

        let cancel = CancelOrderRequest {
            reason: "out of stock".into(),
        };
        assert_eq!(wire_keys(&cancel), declared_names::<CancelOrderRequest>());

        let confirm = ConfirmEmailRequest {
            hash: "somehash123".into(),
        };
        assert_eq!(wire_keys(&confirm), declared_names::<ConfirmEmailRequest>());

        let resend = ResendConfirmEmailRequest {
            email: "test1@techcell.cloud".into(),
        };
        assert_eq!(wire_keys(&resend), declared_names::<ResendConfirmEmailRequest>());
    }

    #[test]
    fn field_lookup_by_wire_name() {
        let field = LoginWithProviderRequest::field("accessToken").unwrap();
        assert_eq!(field.predicate, Predicate::NonEmpty);
        assert!(LoginWithProviderRequest::field("access_token").is_none());
    }
}
