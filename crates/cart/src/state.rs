//! Pure cart state and its transition function.
//!
//! `CartState::apply` is a total function: every action on every state yields
//! a valid next state, so callers never handle errors here. I/O (persistence)
//! lives in the store facade, keeping this module deterministic and directly
//! unit testable.

use lumora_core::{LineItemId, Price, VariantKey};

use crate::item::{CartLineItem, LineItemDraft};

/// A mutation request against the cart.
///
/// `AddItem` carries a pre-generated id so the transition stays deterministic:
/// the store generates the id up front, and the reducer uses it only when the
/// draft does not merge into an existing line.
#[derive(Debug, Clone)]
pub enum CartAction {
    AddItem { id: LineItemId, draft: LineItemDraft },
    RemoveItem { id: LineItemId },
    UpdateQuantity { id: LineItemId, quantity: i64 },
    Clear,
}

/// The cart: an ordered collection of line items.
///
/// Order is insertion order; it matters only for display. Correctness is
/// governed by two invariants upheld by every transition: at most one line
/// per variant triple, and `quantity >= 1` on every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild state from persisted line items.
    ///
    /// Entries that violate the quantity invariant (possible only through
    /// external tampering with the stored document) are dropped rather than
    /// allowed to poison the session.
    #[must_use]
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut state = Self { items };
        let before = state.items.len();
        state.items.retain(|item| item.quantity >= 1);
        if state.items.len() < before {
            tracing::warn!(
                dropped = before - state.items.len(),
                "dropped persisted line items with zero quantity"
            );
        }
        state
    }

    /// Apply an action, producing the next state.
    #[must_use]
    pub fn apply(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem { id, draft } => {
                // Callers are expected to send quantity >= 1; anything else
                // is clamped so the transition stays total.
                let added = draft.quantity.max(1);
                let key = draft.variant_key();
                if let Some(existing) = self.find_by_variant_mut(&key) {
                    existing.quantity = existing.quantity.saturating_add(added);
                } else {
                    let mut item = draft.into_line_item(id);
                    item.quantity = added;
                    self.items.push(item);
                }
            }
            CartAction::RemoveItem { id } => {
                self.items.retain(|item| item.id != id);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if quantity <= 0 {
                    return self.apply(CartAction::RemoveItem { id });
                }
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.quantity = quantity;
                }
            }
            CartAction::Clear => {
                self.items.clear();
            }
        }
        self
    }

    /// Read-only snapshot of the line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a line item by id.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up a line item by variant triple.
    #[must_use]
    pub fn find_by_variant(&self, key: &VariantKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.variant_key() == key)
    }

    fn find_by_variant_mut(&mut self, key: &VariantKey) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| &item.variant_key() == key)
    }

    /// Sum of quantities over all line items; 0 for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Sum of price times quantity over all line items; zero for an empty
    /// cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not the quantity sum).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lumora_core::{ProductId, Scent, SkinType};

    use super::*;

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

    fn add(state: CartState, id: &str, draft: LineItemDraft) -> CartState {
        state.apply(CartAction::AddItem {
            id: LineItemId::new(id),
            draft,
        })
    }

    #[test]
    fn test_add_new_item_appends() {
        let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
        assert_eq!(state.len(), 1);
        let item = state.get(&LineItemId::new("line-1")).unwrap();
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_add_matching_variant_merges_quantity() {
        let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
        let state = add(state, "line-2", cleanser_draft(1, "all", "unscented"));

        assert_eq!(state.len(), 1);
        let key = cleanser_draft(1, "all", "unscented").variant_key();
        let item = state.find_by_variant(&key).unwrap();
        assert_eq!(item.id, LineItemId::new("line-1"));
        assert_eq!(item.quantity, 3);
        assert_eq!(state.total_price(), Price::from_minor_units(255_000));
        // The unused id was discarded along with the would-be duplicate line.
        assert!(state.get(&LineItemId::new("line-2")).is_none());
    }

    #[test]
    fn test_differing_variants_stay_distinct() {
        let state = add(CartState::new(), "line-1", cleanser_draft(1, "oily", "herbal"));
        let state = add(state, "line-2", cleanser_draft(1, "dry", "herbal"));

        assert_eq!(state.len(), 2);
        assert_eq!(state.total_items(), 2);
    }

    #[test]
    fn test_merge_preserves_original_snapshot() {
        let state = add(CartState::new(), "line-1", cleanser_draft(1, "all", "unscented"));
        let mut repriced = cleanser_draft(1, "all", "unscented");
        repriced.price = Price::from_minor_units(90_000);
        repriced.name = "Renamed".to_string();
        let state = add(state, "line-2", repriced);

        // Denormalized snapshot fields are never re-synced on merge.
        let item = state.get(&LineItemId::new("line-1")).unwrap();
        assert_eq!(item.price, Price::from_minor_units(85_000));
        assert_eq!(item.name, "Lumora Solid Cleanser — Unscented");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_clamps_to_one() {
        let state = add(CartState::new(), "line-1", cleanser_draft(0, "all", "unscented"));
        assert_eq!(state.get(&LineItemId::new("line-1")).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_item_and_idempotence() {
        let state = add(CartState::new(), "line-1", cleanser_draft(1, "all", "unscented"));
        let state = state.apply(CartAction::RemoveItem {
            id: LineItemId::new("line-1"),
        });
        assert!(state.is_empty());

        // Removing again, or removing an id that never existed, is a no-op.
        let state = state.apply(CartAction::RemoveItem {
            id: LineItemId::new("line-1"),
        });
        let state = state.apply(CartAction::RemoveItem {
            id: LineItemId::new("ghost"),
        });
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces_in_place() {
        let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
        let state = state.apply(CartAction::UpdateQuantity {
            id: LineItemId::new("line-1"),
            quantity: 5,
        });
        assert_eq!(state.get(&LineItemId::new("line-1")).unwrap().quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -1] {
            let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
            let state = state.apply(CartAction::UpdateQuantity {
                id: LineItemId::new("line-1"),
                quantity,
            });
            assert!(state.is_empty(), "quantity {quantity} should remove the line");
        }
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
        let state = state.apply(CartAction::UpdateQuantity {
            id: LineItemId::new("ghost"),
            quantity: 7,
        });
        assert_eq!(state.get(&LineItemId::new("line-1")).unwrap().quantity, 2);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let state = add(CartState::new(), "line-1", cleanser_draft(1, "oily", "herbal"));
        let state = add(state, "line-2", cleanser_draft(1, "dry", "herbal"));
        let state = state.apply(CartAction::Clear);
        assert!(state.is_empty());
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), Price::ZERO);
    }

    #[test]
    fn test_totals_on_empty_cart() {
        let state = CartState::new();
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), Price::ZERO);
    }

    #[test]
    fn test_totals_after_mutation_sequence() {
        let state = add(CartState::new(), "line-1", cleanser_draft(2, "all", "unscented"));
        let mut dish = cleanser_draft(1, "all", "none");
        dish.product_id = ProductId::new("3");
        dish.price = Price::from_minor_units(45_000);
        let state = add(state, "line-2", dish);

        assert_eq!(state.total_items(), 3);
        assert_eq!(state.total_price(), Price::from_minor_units(215_000));

        let state = state.apply(CartAction::UpdateQuantity {
            id: LineItemId::new("line-1"),
            quantity: 1,
        });
        assert_eq!(state.total_items(), 2);
        assert_eq!(state.total_price(), Price::from_minor_units(130_000));
    }

    #[test]
    fn test_from_items_drops_zero_quantity_entries() {
        let mut tampered = cleanser_draft(1, "all", "unscented")
            .into_line_item(LineItemId::new("line-1"));
        tampered.quantity = 0;
        let ok = cleanser_draft(2, "oily", "herbal").into_line_item(LineItemId::new("line-2"));

        let state = CartState::from_items(vec![tampered, ok]);
        assert_eq!(state.len(), 1);
        assert!(state.get(&LineItemId::new("line-2")).is_some());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let state = add(CartState::new(), "line-1", cleanser_draft(1, "oily", "herbal"));
        let state = add(state, "line-2", cleanser_draft(1, "dry", "herbal"));
        let state = add(state, "line-3", cleanser_draft(1, "all", "unscented"));
        let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["line-1", "line-2", "line-3"]);
    }
}
