//! Cart management commands.
//!
//! Each command opens the persistent store, applies one mutation, and lets
//! the store's write-through persistence save the result before the process
//! exits.

use lumora_cart::{CartStore, FileStorage, LineItemDraft, UuidIds};
use lumora_catalog::Catalog;
use lumora_core::{LineItemId, ProductId, Scent, SkinType};

use crate::config::CliConfig;

pub(crate) type PersistentStore = CartStore<FileStorage, UuidIds>;

/// Open the persistent cart store for this configuration.
pub(crate) fn open_store(
    config: &CliConfig,
) -> Result<PersistentStore, Box<dyn std::error::Error>> {
    let storage = FileStorage::open(&config.data_dir)?;
    Ok(CartStore::open_with_key(storage, config.cart_key.clone(), UuidIds))
}

/// Add a product to the cart, snapshotting its catalog data.
///
/// # Errors
///
/// Returns an error if the product id is unknown or storage cannot be
/// opened.
pub fn add(
    config: &CliConfig,
    product_id: &str,
    qty: u32,
    skin_type: &str,
    scent: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    let product_id = ProductId::new(product_id);
    let product = catalog
        .get(&product_id)
        .ok_or_else(|| format!("no product with id {product_id}"))?;

    let skin_type = SkinType::new(skin_type);
    if !product.suits_skin_type(&skin_type) {
        tracing::warn!(
            product = %product.id,
            skin_type = %skin_type,
            "product is not formulated for this skin type"
        );
    }

    let mut store = open_store(config)?;
    store.add_item(LineItemDraft {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        quantity: qty,
        skin_type,
        scent: scent.map_or_else(|| product.scent.clone(), Scent::new),
        image: product.primary_image().to_string(),
    });

    println!(
        "Added {} — cart now has {} item(s), {}",
        product.name,
        store.total_items(),
        store.total_price().display()
    );
    Ok(())
}

/// Print the cart contents and derived totals.
///
/// # Errors
///
/// Returns an error if storage cannot be opened.
pub fn show(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    if store.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for item in store.items() {
        println!(
            "{}  {} ×{}  [{} / {}]  {}",
            item.id,
            item.name,
            item.quantity,
            item.skin_type,
            item.scent,
            item.line_total().display(),
        );
    }
    println!();
    println!("items: {}", store.total_items());
    println!("total: {}", store.total_price().display());
    Ok(())
}

/// Set a line item's quantity; zero or below removes the line.
///
/// # Errors
///
/// Returns an error if storage cannot be opened.
pub fn update(
    config: &CliConfig,
    line_id: &str,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    store.update_quantity(&LineItemId::new(line_id), quantity);
    println!(
        "Cart now has {} item(s), {}",
        store.total_items(),
        store.total_price().display()
    );
    Ok(())
}

/// Remove a line item; unknown ids are a no-op.
///
/// # Errors
///
/// Returns an error if storage cannot be opened.
pub fn remove(config: &CliConfig, line_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    store.remove_item(&LineItemId::new(line_id));
    println!(
        "Cart now has {} item(s), {}",
        store.total_items(),
        store.total_price().display()
    );
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if storage cannot be opened.
pub fn clear(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    store.clear_cart();
    println!("Cart cleared.");
    Ok(())
}
