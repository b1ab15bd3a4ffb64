//! The cart store facade.
//!
//! Owns the authoritative [`CartState`], an injected id generator, and the
//! persistence adapter. All presentation surfaces read snapshots and issue
//! mutations through this interface; nothing else holds cart data.

use lumora_core::{LineItemId, Price};

use crate::ids::{IdGenerator, SequentialIds};
use crate::item::{CartLineItem, LineItemDraft};
use crate::persist::CartPersistence;
use crate::state::{CartAction, CartState};
use crate::storage::{MemoryStorage, Storage};

/// The cart store.
///
/// Construction restores whatever the storage backend holds under the cart
/// key; every mutation writes the items collection back. The `is_open`
/// drawer flag shares the store's lifecycle but is never persisted.
#[derive(Debug)]
pub struct CartStore<S: Storage, G: IdGenerator> {
    state: CartState,
    ids: G,
    persistence: CartPersistence<S>,
    is_open: bool,
}

impl CartStore<MemoryStorage, SequentialIds> {
    /// Ephemeral store with deterministic ids; intended for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new(), SequentialIds::new())
    }
}

impl<S: Storage, G: IdGenerator> CartStore<S, G> {
    /// Open a store over `storage` under [`DEFAULT_CART_KEY`], restoring any
    /// persisted line items.
    ///
    /// [`DEFAULT_CART_KEY`]: crate::persist::DEFAULT_CART_KEY
    pub fn open(storage: S, ids: G) -> Self {
        let persistence = CartPersistence::with_default_key(storage);
        Self::from_persistence(persistence, ids)
    }

    /// Open a store persisting under a custom key.
    pub fn open_with_key(storage: S, key: impl Into<String>, ids: G) -> Self {
        Self::from_persistence(CartPersistence::new(storage, key), ids)
    }

    fn from_persistence(persistence: CartPersistence<S>, ids: G) -> Self {
        let state = persistence.load();
        tracing::debug!(
            lines = state.len(),
            key = persistence.key(),
            "cart store opened"
        );
        Self {
            state,
            ids,
            persistence,
            is_open: false,
        }
    }

    /// Add an item to the cart.
    ///
    /// Merges into the existing line with the same `(product, skin type,
    /// scent)` triple, preserving that line's id; otherwise appends a new
    /// line with a freshly generated id. A zero quantity is clamped to 1 so
    /// the operation stays total.
    pub fn add_item(&mut self, draft: LineItemDraft) {
        if draft.quantity == 0 {
            tracing::warn!(
                product_id = %draft.product_id,
                "add_item called with zero quantity, clamping to 1"
            );
        }
        let id = self.ids.next_id();
        self.dispatch(CartAction::AddItem { id, draft });
    }

    /// Remove the line item with the given id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &LineItemId) {
        self.dispatch(CartAction::RemoveItem { id: id.clone() });
    }

    /// Set a line item's quantity. A quantity of zero or below removes the
    /// line entirely; unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    fn dispatch(&mut self, action: CartAction) {
        self.state = std::mem::take(&mut self.state).apply(action);
        self.persistence.save(&self.state);
    }

    /// Read-only snapshot of the line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    /// Sum of price times quantity over all line items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.state.total_price()
    }

    /// Sum of quantities over all line items.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.state.total_items()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Whether the cart drawer is open. Pure UI state, never persisted.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Set the cart drawer visibility.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Whether persistence has been disabled after a storage failure.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.persistence.is_degraded()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lumora_core::{ProductId, Scent, SkinType};

    use super::*;
    use crate::persist::DEFAULT_CART_KEY;

    fn cleanser_draft(quantity: u32, skin_type: &str, scent: &str) -> LineItemDraft {
        LineItemDraft {
            product_id: ProductId::new("1"),
            name: "Lumora Solid Cleanser — Unscented".to_string(),
            price: Price::from_minor_units(85_000),
            quantity,
            skin_type: SkinType::new(skin_type),
            scent: Scent::new(scent),
            image: "/images/cleanser-unscented-1.jpg".to_string(),
        }
    }

    #[test]
    fn test_spec_scenario_merge_same_variant() {
        let mut store = CartStore::in_memory();
        store.add_item(cleanser_draft(2, "all", "unscented"));
        store.add_item(cleanser_draft(1, "all", "unscented"));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 3);
        assert_eq!(store.total_price(), Price::from_minor_units(255_000));
    }

    #[test]
    fn test_spec_scenario_distinct_variants() {
        let mut store = CartStore::in_memory();
        store.add_item(cleanser_draft(1, "oily", "herbal"));
        store.add_item(cleanser_draft(1, "dry", "herbal"));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn test_generated_ids_are_sequential() {
        let mut store = CartStore::in_memory();
        store.add_item(cleanser_draft(1, "oily", "herbal"));
        store.add_item(cleanser_draft(1, "dry", "herbal"));

        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["line-1", "line-2"]);
    }

    #[test]
    fn test_update_and_remove_through_store() {
        let mut store = CartStore::in_memory();
        store.add_item(cleanser_draft(2, "all", "unscented"));
        let id = store.items()[0].id.clone();

        store.update_quantity(&id, 5);
        assert_eq!(store.items()[0].quantity, 5);

        store.update_quantity(&id, 0);
        assert!(store.is_empty());

        // Idempotent on an id that is already gone.
        store.remove_item(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let mut store = CartStore::in_memory();
        store.add_item(cleanser_draft(1, "oily", "herbal"));
        store.add_item(cleanser_draft(1, "dry", "herbal"));
        store.clear_cart();
        assert!(store.is_empty());
        assert_eq!(store.total_price(), Price::ZERO);
    }

    #[test]
    fn test_open_flag_is_not_persisted() {
        let mut storage = MemoryStorage::new();
        {
            let mut store = CartStore::open(&mut storage, SequentialIds::new());
            store.add_item(cleanser_draft(1, "all", "unscented"));
            store.set_open(true);
            assert!(store.is_open());
        }
        let raw = storage.get(DEFAULT_CART_KEY).unwrap().unwrap();
        assert!(!raw.contains("isOpen"));
        assert!(!raw.contains("is_open"));

        let store = CartStore::open(storage, SequentialIds::new());
        assert!(!store.is_open());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut store =
            CartStore::open_with_key(MemoryStorage::new(), "guest-cart", SequentialIds::new());
        store.add_item(cleanser_draft(1, "all", "unscented"));
        assert!(!store.is_degraded());
    }
}
