use serde::{Deserialize, Serialize};

use techcell_core::{UnknownStatusError, ValueObject};

/// Order status lifecycle.
///
/// Each variant maps to a fixed lower-case literal used on the wire and in
/// storage. Parsing is exact and case-sensitive; anything else is an
/// [`UnknownStatusError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Shipping,
    Completed,
    Canceled,
    Failed,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Shipping,
        OrderStatus::Completed,
        OrderStatus::Canceled,
        OrderStatus::Failed,
    ];

    /// Canonical wire literal.
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UnknownStatusError> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "shipping" => Ok(OrderStatus::Shipping),
            "completed" => Ok(OrderStatus::Completed),
            "canceled" => Ok(OrderStatus::Canceled),
            "failed" => Ok(OrderStatus::Failed),
            other => Err(UnknownStatusError::new(other)),
        }
    }

    /// All wire literals, in declaration order.
    pub fn literals() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(OrderStatus::as_str)
    }
}

impl ValueObject for OrderStatus {}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = UnknownStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = UnknownStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderStatus> for &'static str {
    fn from(status: OrderStatus) -> Self {
        status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_match_variant_names() {
        let literals: Vec<_> = OrderStatus::literals().collect();
        assert_eq!(
            literals,
            ["pending", "preparing", "shipping", "completed", "canceled", "failed"]
        );
    }

    #[test]
    fn serializes_as_bare_lowercase_string() {
        let json = serde_json::to_string(&OrderStatus::Canceled).unwrap();
        assert_eq!(json, "\"canceled\"");
    }

    #[test]
    fn deserializes_from_literal() {
        let status: OrderStatus = serde_json::from_str("\"shipping\"").unwrap();
        assert_eq!(status, OrderStatus::Shipping);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = OrderStatus::parse("Pending").unwrap_err();
        assert_eq!(err.value(), "Pending");
    }

    #[test]
    fn british_spelling_is_not_accepted() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn unknown_literal_surfaces_in_serde_error() {
        let err = serde_json::from_str::<OrderStatus>("\"lost\"").unwrap_err();
        assert!(err.to_string().contains("unknown order status"));
    }

    #[test]
    fn non_string_json_is_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("3").is_err());
    }

    #[test]
    fn status_embeds_in_larger_entity() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct OrderRow {
            id: u32,
            status: OrderStatus,
        }

        let row: OrderRow = serde_json::from_value(serde_json::json!({
            "id": 7,
            "status": "failed",
        }))
        .unwrap();
        assert_eq!(row.status, OrderStatus::Failed);
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            serde_json::json!({ "id": 7, "status": "failed" })
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: serialize then deserialize yields the same status.
            #[test]
            fn wire_round_trip(idx in 0usize..6) {
                let status = OrderStatus::ALL[idx];
                let json = serde_json::to_string(&status).unwrap();
                let back: OrderStatus = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, status);
                prop_assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
            }

            /// Property: any string outside the six literals is rejected verbatim.
            #[test]
            fn unknown_strings_are_rejected(value in ".*") {
                prop_assume!(!OrderStatus::literals().any(|l| l == value));
                let err = OrderStatus::parse(&value).unwrap_err();
                prop_assert_eq!(err.value(), value.as_str());
            }
        }
    }
}
