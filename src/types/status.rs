//! Order status as reported by the matcher.
//!
//! ## Wire Table
//!
//! | wire string                   | status            |
//! |-------------------------------|-------------------|
//! | `Accepted`, `OrderAccepted`   | `Accepted`        |
//! | `Filled`                      | `Filled`          |
//! | `PartiallyFilled`             | `PartiallyFilled` |
//! | `Cancelled`                   | `Canceled`        |
//! | `NotFound`                    | `NotFound`        |
//!
//! Lookup is exact and case-sensitive. The matcher spells `Cancelled` with
//! two l's; the variant name does not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OrderError, OrderResult};

/// Lifecycle state of an order on the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OrderStatus {
    /// Resting on the book, nothing filled yet
    Accepted,
    /// Completely filled
    Filled,
    /// Resting on the book with a partial fill
    PartiallyFilled,
    /// Cancelled by the owner or the matcher
    Canceled,
    /// The matcher has no record of the order
    NotFound,
}

impl OrderStatus {
    /// Decode a status from the matcher's wire string
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue("Bad status value: <s>")` for any string outside
    /// the wire table.
    pub fn from_wire(s: &str) -> OrderResult<Self> {
        match s {
            "Accepted" | "OrderAccepted" => Ok(OrderStatus::Accepted),
            "Filled" => Ok(OrderStatus::Filled),
            "PartiallyFilled" => Ok(OrderStatus::PartiallyFilled),
            "Cancelled" => Ok(OrderStatus::Canceled),
            "NotFound" => Ok(OrderStatus::NotFound),
            other => Err(OrderError::InvalidEnumValue(format!(
                "Bad status value: {other}"
            ))),
        }
    }

    /// Canonical wire string; always decodes back to `self`
    pub fn as_wire_str(self) -> &'static str {
        match self {
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Filled => "Filled",
            OrderStatus::PartiallyFilled => "PartiallyFilled",
            OrderStatus::Canceled => "Cancelled",
            OrderStatus::NotFound => "NotFound",
        }
    }

    /// True while the order can still trade
    pub fn is_active(self) -> bool {
        matches!(self, OrderStatus::Accepted | OrderStatus::PartiallyFilled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = OrderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_wire(&value)
    }
}

impl From<OrderStatus> for &'static str {
    fn from(status: OrderStatus) -> Self {
        status.as_wire_str()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 5] = [
        OrderStatus::Accepted,
        OrderStatus::Filled,
        OrderStatus::PartiallyFilled,
        OrderStatus::Canceled,
        OrderStatus::NotFound,
    ];

    #[test]
    fn test_wire_table() {
        let table = [
            ("Accepted", OrderStatus::Accepted),
            ("OrderAccepted", OrderStatus::Accepted),
            ("Filled", OrderStatus::Filled),
            ("PartiallyFilled", OrderStatus::PartiallyFilled),
            ("Cancelled", OrderStatus::Canceled),
            ("NotFound", OrderStatus::NotFound),
        ];
        for (wire, expected) in table {
            assert_eq!(OrderStatus::from_wire(wire).unwrap(), expected, "{wire}");
        }
    }

    #[test]
    fn test_unknown_strings_are_rejected() {
        for wire in ["Canceled", "accepted", "FILLED", "Partially Filled", "", " Filled"] {
            let err = OrderStatus::from_wire(wire).unwrap_err();
            assert_eq!(
                err,
                OrderError::InvalidEnumValue(format!("Bad status value: {wire}"))
            );
        }
    }

    #[test]
    fn test_is_active() {
        let active: Vec<_> = ALL.into_iter().filter(|s| s.is_active()).collect();
        assert_eq!(active, vec![OrderStatus::Accepted, OrderStatus::PartiallyFilled]);
    }

    #[test]
    fn test_wire_str_decodes_to_self() {
        for status in ALL {
            assert_eq!(OrderStatus::from_wire(status.as_wire_str()).unwrap(), status);
        }
        assert_eq!(OrderStatus::Canceled.to_string(), "Cancelled");
    }

    #[test]
    fn test_serde() {
        let status: OrderStatus = serde_json::from_str("\"OrderAccepted\"").unwrap();
        assert_eq!(status, OrderStatus::Accepted);

        let json = serde_json::to_string(&OrderStatus::Canceled).unwrap();
        assert_eq!(json, "\"Cancelled\"");

        let err = serde_json::from_str::<OrderStatus>("\"Open\"").unwrap_err();
        assert!(err.to_string().contains("Bad status value: Open"));

        // Absent is modelled with Option, never as a status
        let absent: Option<OrderStatus> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, None);
    }
}
