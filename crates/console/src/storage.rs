//! Local persistence for the console collections.
//!
//! Each collection is mirrored to a named slot - `pizzas`, `pedidos`,
//! `estoque` - stored as a JSON-serialized array in `<data_dir>/<slot>.json`.
//! Slots are read once at startup and overwritten after every mutation of
//! their collection. The adapter never initiates writes on its own; the
//! domain store owns all state and calls in after each change.
//!
//! An absent slot file is distinguished from a present-but-empty one:
//! [`LocalStore::read_slot`] returns `Ok(None)` for absent, which the domain
//! store uses to decide whether the default stock list should be seeded.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Slot name for the pizza catalog (local-origin records only).
pub const PIZZAS_SLOT: &str = "pizzas";
/// Slot name for orders.
pub const ORDERS_SLOT: &str = "pedidos";
/// Slot name for stock items.
pub const STOCK_SLOT: &str = "estoque";

/// Errors from reading or writing a persistence slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on slot {slot}: {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed data in slot {slot}: {source}")]
    Malformed {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key-value store for the console collections.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = data_dir.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            slot: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Read a slot into a vector of records.
    ///
    /// Returns `Ok(None)` when the slot file does not exist. A present slot
    /// holding `[]` yields `Ok(Some(vec![]))`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O failure or malformed JSON.
    pub fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<Vec<T>>, StorageError> {
        let path = self.slot_path(slot);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    slot: slot.to_string(),
                    source,
                });
            }
        };

        let records = serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            slot: slot.to_string(),
            source,
        })?;
        Ok(Some(records))
    }

    /// Overwrite a slot with the serialized array.
    ///
    /// Writes to a temp file in the same directory, then renames over the
    /// slot, so a crash mid-write never leaves a truncated slot behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O or serialization failure.
    pub fn write_slot<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records).map_err(|source| StorageError::Malformed {
            slot: slot.to_string(),
            source,
        })?;

        let path = self.slot_path(slot);
        let tmp = self.root.join(format!(".{slot}.json.tmp"));
        fs::write(&tmp, raw)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| StorageError::Io {
                slot: slot.to_string(),
                source,
            })
    }

    /// Path of a slot file under the store root.
    #[must_use]
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}
