//! Forno Core - Shared types library.
//!
//! This crate provides common types used across all Forno components:
//! - `console` - Management console service (catalog, orders, stock)
//! - `integration-tests` - End-to-end startup/sync scenarios
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no filesystem access. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`records`] - Catalog, order, and stock record structs
//! - [`catalog`] - The remote/local catalog merge function

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod records;
pub mod types;

pub use catalog::merge_catalog;
pub use records::*;
pub use types::*;
