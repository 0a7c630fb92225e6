//! Status and provenance enums.

use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
///
/// Orders are created as [`OrderStatus::Pending`]; every later change goes
/// through the status-only update operation on the domain store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InPreparation,
    OutForDelivery,
    Completed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InPreparation => write!(f, "in_preparation"),
            Self::OutForDelivery => write!(f, "out_for_delivery"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_preparation" => Ok(Self::InPreparation),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("unknown order status: {s}")),
        }
    }
}

/// Provenance marker for catalog records.
///
/// Records fetched from the catalog endpoint are tagged [`RecordOrigin::Remote`]
/// at ingestion; records created through the console are [`RecordOrigin::Local`].
/// Only local records are ever written to the persisted `pizzas` slot, so
/// server-sourced data is always re-fetched rather than cached stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrigin {
    #[default]
    Local,
    Remote,
}

impl RecordOrigin {
    /// Whether a record with this origin belongs in local persistence.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::InPreparation,
            OrderStatus::OutForDelivery,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let parsed = OrderStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(OrderStatus::from_str("delivered").is_err());
    }

    #[test]
    fn origin_wire_values_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordOrigin::Remote).unwrap(),
            "\"remote\""
        );
        assert_eq!(
            serde_json::to_string(&RecordOrigin::Local).unwrap(),
            "\"local\""
        );
    }

    #[test]
    fn default_origin_is_local() {
        assert!(RecordOrigin::default().is_local());
        assert!(!RecordOrigin::Remote.is_local());
    }
}
