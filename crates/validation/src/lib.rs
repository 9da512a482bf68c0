//! Request record validation.
//!
//! Each request record declares a table of [`FieldDescriptor`]s. A single
//! generic routine ([`RequestValidator`]) interprets those tables against
//! untrusted JSON, so no record carries its own validation code.
//!
//! - `descriptor.rs`: field descriptors and predicates
//! - `record.rs`: the `Record` trait tying a struct to its descriptor table
//! - `records.rs`: the concrete request records
//! - `validator.rs`: the validation service
//! - `config.rs`: validator configuration
//! - `schema.rs`: API documentation rendering from descriptors

pub mod config;
pub mod descriptor;
pub mod record;
pub mod records;
pub mod schema;
pub mod validator;

pub use config::ValidationConfig;
pub use descriptor::{FieldDescriptor, Predicate};
pub use record::Record;
pub use records::{
    CancelOrderRequest, ConfirmEmailRequest, LoginWithProviderRequest, ResendConfirmEmailRequest,
};
pub use validator::RequestValidator;
