//! Shared type definitions.
//!
//! - [`id`] - Type-safe ID newtypes (`PizzaId`, `OrderId`, `StockItemId`)
//! - [`price`] - Decimal-backed price with currency
//! - [`status`] - Order status and record origin enums

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::*;
pub use status::*;
