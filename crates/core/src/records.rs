//! Record structs for the three console collections.
//!
//! Each collection has a full record type (what is stored and listed) and a
//! draft type carrying only the caller-supplied fields. Identifiers,
//! timestamps, provenance, order status, and order totals are assigned by
//! the domain store, never by the caller.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, PizzaId, Price, RecordOrigin, StockItemId};

/// A catalog entry describing a sellable pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaRecord {
    pub id: PizzaId,
    pub name: String,
    pub price: Price,
    pub available: bool,
    /// Provenance marker; remote payloads are re-tagged at ingestion.
    #[serde(default)]
    pub origin: RecordOrigin,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of a pizza record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaDraft {
    pub name: String,
    pub price: Price,
    pub available: bool,
}

/// A customer purchase request referencing one catalog entry.
///
/// The `pizza` field is the catalog entry's name, denormalized at creation
/// time; it is not a foreign key and is never revalidated against the
/// catalog after the order exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub pizza: String,
    pub quantity: u32,
    /// Catalog price × quantity, computed once at creation.
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of an order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub pizza: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
}

/// An inventory entry tracking raw-ingredient quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub ingredient: String,
    pub quantity: Decimal,
    pub unit: String,
    /// Minimum threshold for low-stock signaling.
    pub minimum: Decimal,
}

impl StockItem {
    /// Whether the item is at or below its minimum threshold.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.quantity <= self.minimum
    }
}

/// Caller-supplied fields of a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItemDraft {
    pub ingredient: String,
    pub quantity: Decimal,
    pub unit: String,
    pub minimum: Decimal,
}
