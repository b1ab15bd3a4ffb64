//! Integration tests for Lumora.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumora-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Shopping flows through catalog + cart together
//! - `persistence` - Cart durability across store instances
//!
//! This crate's library provides shared helpers for building file-backed
//! stores and catalog-sourced drafts.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use lumora_cart::{CartStore, FileStorage, LineItemDraft, SequentialIds};
use lumora_catalog::Catalog;
use lumora_core::{ProductId, Scent, SkinType};

/// A file-backed store with deterministic ids rooted at `dir`.
///
/// # Panics
///
/// Panics if the storage directory cannot be created; acceptable in test
/// setup.
#[must_use]
pub fn file_store(dir: &Path) -> CartStore<FileStorage, SequentialIds> {
    let storage = FileStorage::open(dir).expect("storage dir");
    CartStore::open(storage, SequentialIds::new())
}

/// Build an add-to-cart draft from seeded catalog data, the way the
/// storefront surfaces do: snapshot name/price/image from the product,
/// selectors from the shopper.
///
/// # Panics
///
/// Panics if `product_id` is not in the seeded catalog.
#[must_use]
pub fn draft_from_catalog(
    catalog: &Catalog,
    product_id: &str,
    quantity: u32,
    skin_type: &str,
    scent: &str,
) -> LineItemDraft {
    let product = catalog
        .get(&ProductId::new(product_id))
        .expect("seeded product");
    LineItemDraft {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        quantity,
        skin_type: SkinType::new(skin_type),
        scent: Scent::new(scent),
        image: product.primary_image().to_string(),
    }
}
