//! Domain store owning the console collections.
//!
//! The store is the sole owner of the pizza catalog, the order list, and the
//! stock list. All mutations go through the named operations here; after
//! each one the changed collection is mirrored to its persistence slot.
//!
//! # Persistence policy
//!
//! Slot writes are fire-and-forget: a failed write is logged at `warn!` and
//! the in-memory mutation still stands, so the console keeps working with
//! whatever data it has. Only local-origin pizzas are written to the
//! `pizzas` slot; server-sourced records are re-fetched at every startup
//! rather than cached.
//!
//! # No-op policy
//!
//! Editing or deleting an identifier that does not exist is not an error;
//! the operation silently does nothing and reports `None`/`false`.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use forno_core::{
    OrderDraft, OrderId, OrderRecord, OrderStatus, PizzaDraft, PizzaId, PizzaRecord, RecordOrigin,
    StockItem, StockItemDraft, StockItemId, merge_catalog,
};

use crate::storage::{LocalStore, ORDERS_SLOT, PIZZAS_SLOT, STOCK_SLOT, StorageError};

/// In-memory collections plus their persistence mirror.
#[derive(Debug)]
pub struct DomainStore {
    pizzas: Vec<PizzaRecord>,
    orders: Vec<OrderRecord>,
    stock: Vec<StockItem>,
    storage: LocalStore,
}

impl DomainStore {
    /// Build the store from persisted state and the freshly fetched catalog.
    ///
    /// Reads the three slots once; the pizza catalog becomes
    /// `merge_catalog(remote, local)` so server records win over any locally
    /// cached copy sharing their ID. An absent `estoque` slot (first run)
    /// triggers the default ingredient seed; absent pizza/order slots simply
    /// yield empty collections. A malformed slot is treated the same as an
    /// absent one, with a warning.
    #[must_use]
    pub fn bootstrap(storage: LocalStore, remote_catalog: Vec<PizzaRecord>) -> Self {
        let local_pizzas = read_or_default(&storage, PIZZAS_SLOT).unwrap_or_default();
        let orders = read_or_default(&storage, ORDERS_SLOT).unwrap_or_default();
        let stock: Option<Vec<StockItem>> = read_or_default(&storage, STOCK_SLOT);
        let first_run = stock.is_none();

        let mut store = Self {
            pizzas: merge_catalog(remote_catalog, local_pizzas),
            orders,
            stock: stock.unwrap_or_default(),
            storage,
        };

        if first_run {
            store.stock = default_stock();
            info!(items = store.stock.len(), "Seeded default stock list");
            store.persist_stock();
        }

        store
    }

    // ------------------------------------------------------------------
    // Pizzas
    // ------------------------------------------------------------------

    /// Current pizza catalog (merged view).
    #[must_use]
    pub fn pizzas(&self) -> &[PizzaRecord] {
        &self.pizzas
    }

    /// Add a pizza created through the console.
    pub fn add_pizza(&mut self, draft: PizzaDraft) -> PizzaRecord {
        let record = PizzaRecord {
            id: PizzaId::new(),
            name: draft.name,
            price: draft.price,
            available: draft.available,
            origin: RecordOrigin::Local,
            created_at: Utc::now(),
        };
        self.pizzas.push(record.clone());
        self.persist_pizzas();
        record
    }

    /// Replace the caller-editable fields of a pizza.
    ///
    /// Identifier, origin, and creation timestamp are kept. Returns `None`
    /// (no-op) when the identifier is unknown.
    pub fn edit_pizza(&mut self, id: PizzaId, draft: PizzaDraft) -> Option<PizzaRecord> {
        let pizza = self.pizzas.iter_mut().find(|p| p.id == id)?;
        pizza.name = draft.name;
        pizza.price = draft.price;
        pizza.available = draft.available;
        let updated = pizza.clone();
        self.persist_pizzas();
        Some(updated)
    }

    /// Remove a pizza. Returns `false` (no-op) when the identifier is unknown.
    pub fn delete_pizza(&mut self, id: PizzaId) -> bool {
        let before = self.pizzas.len();
        self.pizzas.retain(|p| p.id != id);
        if self.pizzas.len() == before {
            return false;
        }
        self.persist_pizzas();
        true
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Current order list.
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Create an order.
    ///
    /// The total is the referenced catalog entry's price times the quantity,
    /// computed once here; an order for a pizza name not in the catalog gets
    /// a zero total.
    pub fn add_order(&mut self, draft: OrderDraft) -> OrderRecord {
        let total = self.order_total(&draft.pizza, draft.quantity);
        let record = OrderRecord {
            id: OrderId::new(),
            customer: draft.customer,
            phone: draft.phone,
            address: draft.address,
            pizza: draft.pizza,
            quantity: draft.quantity,
            total,
            status: OrderStatus::Pending,
            notes: draft.notes,
            created_at: Utc::now(),
        };
        self.orders.push(record.clone());
        self.persist_orders();
        record
    }

    /// Replace the caller-editable fields of an order.
    ///
    /// Status and creation timestamp are kept; the total is recomputed from
    /// the current catalog. Returns `None` (no-op) when the identifier is
    /// unknown.
    pub fn edit_order(&mut self, id: OrderId, draft: OrderDraft) -> Option<OrderRecord> {
        let total = self.order_total(&draft.pizza, draft.quantity);
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.customer = draft.customer;
        order.phone = draft.phone;
        order.address = draft.address;
        order.pizza = draft.pizza;
        order.quantity = draft.quantity;
        order.notes = draft.notes;
        order.total = total;
        let updated = order.clone();
        self.persist_orders();
        Some(updated)
    }

    /// Remove an order. Returns `false` (no-op) when the identifier is unknown.
    pub fn delete_order(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            return false;
        }
        self.persist_orders();
        true
    }

    /// Replace only the status field of an order.
    ///
    /// Returns `None` (no-op) when the identifier is unknown.
    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> Option<OrderRecord> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.status = status;
        let updated = order.clone();
        self.persist_orders();
        Some(updated)
    }

    fn order_total(&self, pizza_name: &str, quantity: u32) -> Decimal {
        self.pizzas
            .iter()
            .find(|p| p.name == pizza_name)
            .map(|p| p.price.line_total(quantity))
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Stock
    // ------------------------------------------------------------------

    /// Current stock list.
    #[must_use]
    pub fn stock(&self) -> &[StockItem] {
        &self.stock
    }

    /// Stock items at or below their minimum threshold.
    #[must_use]
    pub fn low_stock(&self) -> Vec<StockItem> {
        self.stock.iter().filter(|item| item.is_low()).cloned().collect()
    }

    /// Add a stock item.
    pub fn add_stock_item(&mut self, draft: StockItemDraft) -> StockItem {
        let item = StockItem {
            id: StockItemId::new(),
            ingredient: draft.ingredient,
            quantity: draft.quantity,
            unit: draft.unit,
            minimum: draft.minimum,
        };
        self.stock.push(item.clone());
        self.persist_stock();
        item
    }

    /// Replace the caller-editable fields of a stock item.
    ///
    /// Returns `None` (no-op) when the identifier is unknown.
    pub fn edit_stock_item(&mut self, id: StockItemId, draft: StockItemDraft) -> Option<StockItem> {
        let item = self.stock.iter_mut().find(|i| i.id == id)?;
        item.ingredient = draft.ingredient;
        item.quantity = draft.quantity;
        item.unit = draft.unit;
        item.minimum = draft.minimum;
        let updated = item.clone();
        self.persist_stock();
        Some(updated)
    }

    /// Remove a stock item. Returns `false` (no-op) when the identifier is unknown.
    pub fn delete_stock_item(&mut self, id: StockItemId) -> bool {
        let before = self.stock.len();
        self.stock.retain(|i| i.id != id);
        if self.stock.len() == before {
            return false;
        }
        self.persist_stock();
        true
    }

    /// Replace only the quantity field of a stock item.
    ///
    /// Returns `None` (no-op) when the identifier is unknown.
    pub fn update_stock_quantity(
        &mut self,
        id: StockItemId,
        quantity: Decimal,
    ) -> Option<StockItem> {
        let item = self.stock.iter_mut().find(|i| i.id == id)?;
        item.quantity = quantity;
        let updated = item.clone();
        self.persist_stock();
        Some(updated)
    }

    // ------------------------------------------------------------------
    // Persistence mirrors
    // ------------------------------------------------------------------

    fn persist_pizzas(&self) {
        // Server-sourced records are excluded so they are re-fetched, never
        // cached stale.
        let local: Vec<&PizzaRecord> = self
            .pizzas
            .iter()
            .filter(|p| p.origin.is_local())
            .collect();
        log_write_failure(PIZZAS_SLOT, self.storage.write_slot(PIZZAS_SLOT, &local));
    }

    fn persist_orders(&self) {
        log_write_failure(ORDERS_SLOT, self.storage.write_slot(ORDERS_SLOT, &self.orders));
    }

    fn persist_stock(&self) {
        log_write_failure(STOCK_SLOT, self.storage.write_slot(STOCK_SLOT, &self.stock));
    }
}

/// Read a slot, demoting a malformed slot to "no local data" with a warning.
fn read_or_default<T: serde::de::DeserializeOwned>(
    storage: &LocalStore,
    slot: &str,
) -> Option<Vec<T>> {
    match storage.read_slot(slot) {
        Ok(records) => records,
        Err(err) => {
            warn!(slot, error = %err, "Ignoring unreadable slot");
            None
        }
    }
}

fn log_write_failure(slot: &str, result: Result<(), StorageError>) {
    if let Err(err) = result {
        warn!(slot, error = %err, "Failed to persist collection");
    }
}

/// Default ingredient list seeded on first run (absent `estoque` slot).
fn default_stock() -> Vec<StockItem> {
    const SEED: &[(&str, i64, &str, i64)] = &[
        ("Mussarela", 100, "kg", 20),
        ("Tomate", 50, "kg", 10),
        ("Presunto", 40, "kg", 10),
        ("Calabresa", 35, "kg", 10),
        ("Cebola", 30, "kg", 5),
        ("Azeitona", 25, "kg", 5),
        ("Massa", 80, "kg", 15),
    ];

    SEED.iter()
        .map(|&(ingredient, quantity, unit, minimum)| StockItem {
            id: StockItemId::new(),
            ingredient: ingredient.to_owned(),
            quantity: Decimal::from(quantity),
            unit: unit.to_owned(),
            minimum: Decimal::from(minimum),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forno_core::Price;
    use rust_decimal_macros::dec;

    fn empty_store() -> (tempfile::TempDir, DomainStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();
        let store = DomainStore::bootstrap(storage, Vec::new());
        (dir, store)
    }

    fn remote_pizza(name: &str, price: Decimal) -> PizzaRecord {
        PizzaRecord {
            id: PizzaId::new(),
            name: name.to_owned(),
            price: Price::brl(price),
            available: true,
            origin: RecordOrigin::Remote,
            created_at: Utc::now(),
        }
    }

    fn draft(name: &str, price: Decimal) -> PizzaDraft {
        PizzaDraft {
            name: name.to_owned(),
            price: Price::brl(price),
            available: true,
        }
    }

    fn order_draft(pizza: &str, quantity: u32) -> OrderDraft {
        OrderDraft {
            customer: "Ana".to_owned(),
            phone: "11 99999-0000".to_owned(),
            address: "Rua das Flores 12".to_owned(),
            pizza: pizza.to_owned(),
            quantity,
            notes: String::new(),
        }
    }

    // -- bootstrap ------------------------------------------------------

    #[test]
    fn first_run_seeds_default_stock_and_persists_it() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();
        let store = DomainStore::bootstrap(storage.clone(), Vec::new());

        assert_eq!(store.stock().len(), 7);
        assert_eq!(store.stock()[0].ingredient, "Mussarela");

        // Seed reaches the slot, so a second bootstrap reads it back instead
        // of reseeding.
        let persisted: Option<Vec<StockItem>> = storage.read_slot(STOCK_SLOT).unwrap();
        assert_eq!(persisted.unwrap().len(), 7);
    }

    #[test]
    fn present_but_empty_stock_slot_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();
        storage.write_slot::<StockItem>(STOCK_SLOT, &[]).unwrap();

        let store = DomainStore::bootstrap(storage, Vec::new());
        assert!(store.stock().is_empty());
    }

    #[test]
    fn bootstrap_merges_remote_over_persisted_local() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();

        // First session: a locally created pizza lands in the slot.
        let mut store = DomainStore::bootstrap(storage.clone(), Vec::new());
        let local = store.add_pizza(draft("Pepperoni", dec!(35)));

        // Second session: the server now also knows that ID.
        let mut shadow = remote_pizza("Pepperoni (official)", dec!(33));
        shadow.id = local.id;
        let remote_only = remote_pizza("Margherita", dec!(30));
        let store = DomainStore::bootstrap(storage, vec![remote_only.clone(), shadow.clone()]);

        assert_eq!(store.pizzas().len(), 2);
        assert_eq!(store.pizzas()[0], remote_only);
        assert_eq!(store.pizzas()[1], shadow);
    }

    // -- pizzas ---------------------------------------------------------

    #[test]
    fn add_pizza_assigns_identity_and_local_origin() {
        let (_dir, mut store) = empty_store();
        let record = store.add_pizza(draft("Margherita", dec!(30)));

        assert_eq!(record.origin, RecordOrigin::Local);
        assert_eq!(store.pizzas(), &[record]);
    }

    #[test]
    fn edit_pizza_keeps_id_and_created_at() {
        let (_dir, mut store) = empty_store();
        let original = store.add_pizza(draft("Margherita", dec!(30)));

        let updated = store
            .edit_pizza(original.id, draft("Margherita Especial", dec!(36)))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Margherita Especial");
        assert_eq!(updated.price.amount, dec!(36));
    }

    #[test]
    fn edit_unknown_pizza_is_a_noop() {
        let (_dir, mut store) = empty_store();
        store.add_pizza(draft("Margherita", dec!(30)));
        let before = store.pizzas().to_vec();

        assert!(store.edit_pizza(PizzaId::new(), draft("Ghost", dec!(1))).is_none());
        assert_eq!(store.pizzas(), before.as_slice());
    }

    #[test]
    fn delete_unknown_pizza_is_a_noop() {
        let (_dir, mut store) = empty_store();
        store.add_pizza(draft("Margherita", dec!(30)));

        assert!(!store.delete_pizza(PizzaId::new()));
        assert_eq!(store.pizzas().len(), 1);
    }

    #[test]
    fn only_local_origin_pizzas_reach_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();
        let remote = remote_pizza("Margherita", dec!(30));
        let mut store = DomainStore::bootstrap(storage.clone(), vec![remote]);

        let local = store.add_pizza(draft("Pepperoni", dec!(35)));

        let persisted: Option<Vec<PizzaRecord>> = storage.read_slot(PIZZAS_SLOT).unwrap();
        assert_eq!(persisted, Some(vec![local]));
    }

    // -- orders ---------------------------------------------------------

    #[test]
    fn order_total_is_price_times_quantity_at_creation() {
        let (_dir, mut store) = empty_store();
        store.add_pizza(draft("Margherita", dec!(32.50)));

        let order = store.add_order(order_draft("Margherita", 3));

        assert_eq!(order.total, dec!(97.50));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn order_for_unknown_pizza_gets_zero_total() {
        let (_dir, mut store) = empty_store();
        let order = store.add_order(order_draft("Inexistente", 2));
        assert_eq!(order.total, Decimal::ZERO);
    }

    #[test]
    fn status_update_touches_nothing_else() {
        let (_dir, mut store) = empty_store();
        store.add_pizza(draft("Margherita", dec!(30)));
        let created = store.add_order(order_draft("Margherita", 2));

        let updated = store
            .update_order_status(created.id, OrderStatus::OutForDelivery)
            .unwrap();

        assert_eq!(updated.status, OrderStatus::OutForDelivery);
        let reverted = OrderRecord {
            status: created.status,
            ..updated
        };
        assert_eq!(reverted, created);
    }

    #[test]
    fn edit_order_preserves_status_and_recomputes_total() {
        let (_dir, mut store) = empty_store();
        store.add_pizza(draft("Margherita", dec!(30)));
        store.add_pizza(draft("Pepperoni", dec!(35)));
        let created = store.add_order(order_draft("Margherita", 1));
        store.update_order_status(created.id, OrderStatus::InPreparation);

        let updated = store.edit_order(created.id, order_draft("Pepperoni", 2)).unwrap();

        assert_eq!(updated.status, OrderStatus::InPreparation);
        assert_eq!(updated.total, dec!(70));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn status_update_of_unknown_order_is_a_noop() {
        let (_dir, mut store) = empty_store();
        assert!(store.update_order_status(OrderId::new(), OrderStatus::Completed).is_none());
    }

    // -- stock ----------------------------------------------------------

    #[test]
    fn stock_quantity_update_touches_nothing_else() {
        let (_dir, mut store) = empty_store();
        let created = store.add_stock_item(StockItemDraft {
            ingredient: "Manjericao".to_owned(),
            quantity: dec!(5),
            unit: "kg".to_owned(),
            minimum: dec!(1),
        });

        let updated = store.update_stock_quantity(created.id, dec!(3.5)).unwrap();

        assert_eq!(updated.quantity, dec!(3.5));
        let reverted = StockItem {
            quantity: created.quantity,
            ..updated
        };
        assert_eq!(reverted, created);
    }

    #[test]
    fn low_stock_reports_items_at_or_below_minimum() {
        let (_dir, mut store) = empty_store();
        let low = store.add_stock_item(StockItemDraft {
            ingredient: "Oregano".to_owned(),
            quantity: dec!(2),
            unit: "kg".to_owned(),
            minimum: dec!(2),
        });
        store.add_stock_item(StockItemDraft {
            ingredient: "Farinha".to_owned(),
            quantity: dec!(50),
            unit: "kg".to_owned(),
            minimum: dec!(10),
        });

        // Default seed is healthy, so only the new item is low.
        let reported = store.low_stock();
        assert_eq!(reported, vec![low]);
    }

    // -- persistence round trip ----------------------------------------

    #[test]
    fn mutations_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStore::open(dir.path()).unwrap();

        let mut store = DomainStore::bootstrap(storage.clone(), Vec::new());
        store.add_pizza(draft("Margherita", dec!(30)));
        let order = store.add_order(order_draft("Margherita", 1));
        store.update_order_status(order.id, OrderStatus::Completed);

        let reloaded = DomainStore::bootstrap(storage, Vec::new());
        assert_eq!(reloaded.pizzas().len(), 1);
        assert_eq!(reloaded.orders().len(), 1);
        assert_eq!(reloaded.orders()[0].status, OrderStatus::Completed);
    }
}
