//! Seeded mock product data.
//!
//! Stand-in for a product database; descriptions are the original Indonesian
//! marketing copy.

use lumora_core::{Price, ProductId, Scent, SkinType};

use crate::product::{Category, Product};

/// The standard Lumora product set.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Lumora Solid Cleanser — Unscented".to_string(),
            description: "Pembersih wajah padat yang lembut dan efektif untuk semua jenis \
                          kulit. Formulasi bebas plastik dengan bahan-bahan alami pilihan."
                .to_string(),
            price: Price::from_minor_units(85_000),
            category: Category::Cleanser,
            skin_types: vec![
                SkinType::any(),
                SkinType::new("sensitive"),
                SkinType::new("dry"),
                SkinType::new("combination"),
            ],
            scent: Scent::new("unscented"),
            images: vec![
                "/images/cleanser-unscented-1.jpg".to_string(),
                "/images/cleanser-unscented-2.jpg".to_string(),
            ],
            stock: 50,
            rating: 4.8,
            review_count: 124,
        },
        Product {
            id: ProductId::new("2"),
            name: "Lumora Solid Cleanser — Herbal".to_string(),
            description: "Pembersih wajah padat dengan aroma herbal yang menyegarkan. \
                          Diperkaya dengan ekstrak tumbuhan alami."
                .to_string(),
            price: Price::from_minor_units(85_000),
            category: Category::Cleanser,
            skin_types: vec![
                SkinType::new("normal"),
                SkinType::new("oily"),
                SkinType::new("combination"),
            ],
            scent: Scent::new("herbal"),
            images: vec!["/images/cleanser-herbal-1.jpg".to_string()],
            stock: 45,
            rating: 4.9,
            review_count: 89,
        },
        Product {
            id: ProductId::new("3"),
            name: "Lumora Facial Bar Dish (Bamboo)".to_string(),
            description: "Tempat sabun wajah dari bambu alami yang sustainable. Desain \
                          minimalis dengan drainase yang baik."
                .to_string(),
            price: Price::from_minor_units(45_000),
            category: Category::Accessory,
            skin_types: vec![],
            scent: Scent::none(),
            images: vec![
                "/images/bamboo-dish-1.webp".to_string(),
                "/images/bamboo-dish-2.jpg".to_string(),
            ],
            stock: 30,
            rating: 4.7,
            review_count: 56,
        },
        Product {
            id: ProductId::new("4"),
            name: "Lumora Travel Pouch".to_string(),
            description: "Kantong travel dari bahan organik untuk menyimpan solid cleanser \
                          saat bepergian. Tahan air dan mudah dibersihkan."
                .to_string(),
            price: Price::from_minor_units(35_000),
            category: Category::Accessory,
            skin_types: vec![],
            scent: Scent::none(),
            images: vec!["/images/travel-pouch-1.jpg".to_string()],
            stock: 25,
            rating: 4.6,
            review_count: 42,
        },
        Product {
            id: ProductId::new("5"),
            name: "Lumora Starter Bundle".to_string(),
            description: "Paket lengkap untuk memulai rutinitas skincare zero waste. Hemat \
                          15% dibanding beli terpisah."
                .to_string(),
            price: Price::from_minor_units(140_000),
            category: Category::Bundle,
            skin_types: vec![SkinType::any()],
            scent: Scent::new("various"),
            images: vec!["/images/cleanser-unscented-1.jpg".to_string()],
            stock: 20,
            rating: 4.9,
            review_count: 67,
        },
        Product {
            id: ProductId::new("6"),
            name: "Lumora Solid Cleanser — Lavender".to_string(),
            description: "Pembersih wajah padat dengan aroma lavender yang menenangkan. \
                          Cocok untuk rutinitas malam hari."
                .to_string(),
            price: Price::from_minor_units(85_000),
            category: Category::Cleanser,
            skin_types: vec![
                SkinType::new("normal"),
                SkinType::new("dry"),
                SkinType::new("sensitive"),
            ],
            scent: Scent::new("lavender"),
            images: vec!["/images/cleanser-unscented-1.jpg".to_string()],
            stock: 35,
            rating: 4.8,
            review_count: 73,
        },
    ]
}
