//! HTTP boundary adapter.
//!
//! Turns request bodies into validated records and validation failures into
//! JSON error responses. Routing is left to the hosting service:
//! - `extract.rs`: the `ValidatedJson` extractor
//! - `errors.rs`: consistent error responses

pub mod errors;
pub mod extract;

pub use extract::ValidatedJson;
