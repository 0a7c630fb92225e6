//! Catalog merging between server-fetched and locally persisted records.

use std::collections::HashSet;

use crate::records::PizzaRecord;
use crate::types::PizzaId;

/// Merge the server catalog with the locally persisted one.
///
/// Server records win: any local record whose ID also appears in `remote` is
/// dropped in favor of the server's version, with no field-level conflict
/// resolution. Locally created records unknown to the server survive the
/// merge. Relative order within each input is preserved, remote first.
///
/// Pure function: neither input is mutated, records are only selected.
#[must_use]
pub fn merge_catalog(remote: Vec<PizzaRecord>, local: Vec<PizzaRecord>) -> Vec<PizzaRecord> {
    let remote_ids: HashSet<PizzaId> = remote.iter().map(|pizza| pizza.id).collect();

    let mut merged = remote;
    merged.extend(
        local
            .into_iter()
            .filter(|pizza| !remote_ids.contains(&pizza.id)),
    );
    merged
}
