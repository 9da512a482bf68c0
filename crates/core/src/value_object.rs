//! Value object trait: equality by value, not identity.
//!
//! Request records, violations and order statuses have **no identity** - they
//! are defined entirely by their field values and discarded after use.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two request
/// records carrying the same fields are the same request as far as the
/// boundary is concerned.
///
/// The trait requires:
/// - **Clone**: values are copied, never shared by reference across requests
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CancelOrderRequest {
///     reason: String,
/// }
///
/// impl ValueObject for CancelOrderRequest {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
