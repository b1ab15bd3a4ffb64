//! Product record and category types.

use lumora_core::{Price, ProductId, Scent, SkinType};
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cleanser,
    Accessory,
    Bundle,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cleanser => "cleanser",
            Self::Accessory => "accessory",
            Self::Bundle => "bundle",
        };
        write!(f, "{s}")
    }
}

/// A catalog product.
///
/// The cart copies `name`, `price`, and the primary image into a line-item
/// snapshot at add-time and never re-reads the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price in minor currency units.
    pub price: Price,
    pub category: Category,
    /// Skin types this product is formulated for; empty for accessories.
    pub skin_types: Vec<SkinType>,
    pub scent: Scent,
    /// Image paths; the first entry is the primary listing image.
    pub images: Vec<String>,
    pub stock: u32,
    pub rating: f32,
    pub review_count: u32,
}

impl Product {
    /// The primary listing image, or an empty path for products without
    /// imagery.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }

    /// Whether the product is formulated for the given skin type. Products
    /// listing the "all" sentinel (or no skin types at all, like accessories)
    /// suit everyone.
    #[must_use]
    pub fn suits_skin_type(&self, skin_type: &SkinType) -> bool {
        self.skin_types.is_empty()
            || self.skin_types.iter().any(SkinType::is_unconstrained)
            || self.skin_types.contains(skin_type)
    }
}
