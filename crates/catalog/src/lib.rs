//! Lumora Catalog - In-memory product catalog.
//!
//! The catalog is the cart's upstream data source: it supplies the product
//! name, unit price, image, and the available skin-type/scent options that
//! get snapshotted into a cart line item at add-time. Data is seeded from
//! hard-coded mock products; there is no database behind it.
//!
//! # Modules
//!
//! - [`product`] - Product record and category types
//! - [`seed`] - The seeded mock product set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod product;
pub mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use lumora_core::ProductId;

pub use product::{Category, Product};

/// Catalog holding all products in memory.
///
/// Cheap to clone; the product set is shared behind an `Arc` and never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_id: Arc<HashMap<ProductId, Product>>,
    ordered: Arc<Vec<ProductId>>,
}

impl Catalog {
    /// Build a catalog from a list of products, preserving their order for
    /// listings.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let ordered: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        let by_id: HashMap<ProductId, Product> =
            products.into_iter().map(|p| (p.id.clone(), p)).collect();
        tracing::debug!(count = by_id.len(), "catalog loaded");
        Self {
            by_id: Arc::new(by_id),
            ordered: Arc::new(ordered),
        }
    }

    /// Catalog seeded with the standard Lumora mock products.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::products())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id)
    }

    /// All products in listing order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.ordered.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_lookup() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 6);

        let cleanser = catalog.get(&ProductId::new("1")).expect("product 1");
        assert_eq!(cleanser.name, "Lumora Solid Cleanser — Unscented");
        assert_eq!(cleanser.price.minor_units(), 85_000);
        assert_eq!(cleanser.scent.as_str(), "unscented");
    }

    #[test]
    fn test_unknown_product_is_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.get(&ProductId::new("999")).is_none());
    }

    #[test]
    fn test_listing_preserves_seed_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}
