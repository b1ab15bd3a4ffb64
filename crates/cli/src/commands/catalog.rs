//! Catalog browsing commands.

use lumora_catalog::Catalog;
use lumora_core::ProductId;

/// List all products with id, name, category, and price.
pub fn list() {
    let catalog = Catalog::seeded();
    for product in catalog.products() {
        println!(
            "{:>3}  {:<42} {:<10} {:>12}  (stock: {})",
            product.id,
            product.name,
            product.category.to_string(),
            product.price.display(),
            product.stock,
        );
    }
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns an error if the product id is unknown.
pub fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    let product_id = ProductId::new(id);
    let product = catalog
        .get(&product_id)
        .ok_or_else(|| format!("no product with id {id}"))?;

    println!("{}", product.name);
    println!("  id:        {}", product.id);
    println!("  category:  {}", product.category);
    println!("  price:     {}", product.price.display());
    println!("  scent:     {}", product.scent);
    if product.skin_types.is_empty() {
        println!("  skin:      (not applicable)");
    } else {
        let skin: Vec<&str> = product.skin_types.iter().map(|s| s.as_str()).collect();
        println!("  skin:      {}", skin.join(", "));
    }
    println!(
        "  rating:    {:.1} ({} reviews)",
        product.rating, product.review_count
    );
    println!("  stock:     {}", product.stock);
    println!();
    println!("  {}", product.description);
    Ok(())
}
