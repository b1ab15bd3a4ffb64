//! Cart line items and add-to-cart drafts.

use lumora_core::{LineItemId, Price, ProductId, Scent, SkinType, VariantKey};
use serde::{Deserialize, Serialize};

/// One distinct purchasable configuration in the cart and its quantity.
///
/// `name`, `price`, and `image` are a display snapshot copied from the
/// catalog at add-time; they are never re-synced with later catalog changes.
///
/// Serialized with camelCase field names, matching the shape the web client
/// historically stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Unique per line item, generated at insertion time.
    pub id: LineItemId,
    /// Catalog product id; not unique across line items, since variants of
    /// the same product coexist as separate lines.
    pub product_id: ProductId,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Price,
    /// Always >= 1 once stored.
    pub quantity: u32,
    pub skin_type: SkinType,
    pub scent: Scent,
    pub image: String,
}

impl CartLineItem {
    /// The variant triple deciding merge identity.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(
            self.product_id.clone(),
            self.skin_type.clone(),
            self.scent.clone(),
        )
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// An add-to-cart request: a line item without an id.
///
/// The id is synthesized by the store's injected generator when the draft
/// turns out not to merge into an existing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDraft {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub skin_type: SkinType,
    pub scent: Scent,
    pub image: String,
}

impl LineItemDraft {
    /// The variant triple deciding merge identity.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(
            self.product_id.clone(),
            self.skin_type.clone(),
            self.scent.clone(),
        )
    }

    /// Materialize the draft as a line item with the given id.
    #[must_use]
    pub fn into_line_item(self, id: LineItemId) -> CartLineItem {
        CartLineItem {
            id,
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            skin_type: self.skin_type,
            scent: self.scent,
            image: self.image,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> LineItemDraft {
        LineItemDraft {
            product_id: ProductId::new("1"),
            name: "Lumora Solid Cleanser — Unscented".to_string(),
            price: Price::from_minor_units(85_000),
            quantity: 2,
            skin_type: SkinType::any(),
            scent: Scent::new("unscented"),
            image: "/images/cleanser-unscented-1.jpg".to_string(),
        }
    }

    #[test]
    fn test_line_total() {
        let item = draft().into_line_item(LineItemId::new("line-1"));
        assert_eq!(item.line_total(), Price::from_minor_units(170_000));
    }

    #[test]
    fn test_draft_and_item_share_variant_key() {
        let d = draft();
        let key = d.variant_key();
        let item = d.into_line_item(LineItemId::new("line-1"));
        assert_eq!(item.variant_key(), key);
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let item = draft().into_line_item(LineItemId::new("line-1"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "1");
        assert_eq!(json["skinType"], "all");
        assert_eq!(json["price"], 85_000);
    }
}
