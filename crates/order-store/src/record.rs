//! Order record types shared by all store implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// How the customer wants to receive the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    Pickup,
    Delivery,
}

impl Fulfillment {
    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Fulfillment::Pickup => "pickup",
            Fulfillment::Delivery => "delivery",
        }
    }
}

impl std::str::FromStr for Fulfillment {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Fulfillment::Pickup),
            "delivery" => Ok(Fulfillment::Delivery),
            other => Err(StoreError::InvalidField(format!(
                "unknown fulfillment method: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pizza size. The order form's "none" placeholder is not a size and
/// never parses into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl std::str::FromStr for Size {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => Err(StoreError::InvalidField(format!("unknown size: {other}"))),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated order that has not been persisted yet.
///
/// Toppings are already normalized to their stored form: the selected
/// values joined with ", ", or an empty string when none were selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub method: Fulfillment,
    pub size: Size,
    pub toppings: String,
    pub comment: String,
}

/// A persisted order as read back from a store.
///
/// Records are immutable once persisted; display formatting of the
/// timestamp happens at render time and never touches stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier, unique and monotonically increasing.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub method: Fulfillment,
    pub size: Size,
    pub toppings: String,
    pub comment: String,
    /// Assigned server-side at submission time, never by the client.
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Builds the persisted record from a validated order plus the
    /// store-assigned id and the service-assigned submission time.
    pub fn from_new(id: i64, new: &NewOrder, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            method: new.method,
            size: new.size,
            toppings: new.toppings.clone(),
            comment: new.comment.clone(),
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn fulfillment_round_trips_through_str() {
        for method in [Fulfillment::Pickup, Fulfillment::Delivery] {
            assert_eq!(Fulfillment::from_str(method.as_str()).unwrap(), method);
        }
    }

    #[test]
    fn size_round_trips_through_str() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(Size::from_str(size.as_str()).unwrap(), size);
        }
    }

    #[test]
    fn size_rejects_none_sentinel() {
        assert!(Size::from_str("none").is_err());
    }

    #[test]
    fn fulfillment_rejects_unknown_value() {
        assert!(Fulfillment::from_str("carrier-pigeon").is_err());
    }
}
