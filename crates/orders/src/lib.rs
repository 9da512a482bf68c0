//! Order lifecycle status.
//!
//! Only the closed set of states and its wire representation live here.
//! Which transitions between them are legal is decided by the order service
//! that owns the order entity.

pub mod status;

pub use status::OrderStatus;
