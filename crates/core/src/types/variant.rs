//! Variant selectors for cart line items.
//!
//! A purchasable configuration is a product plus two variant selectors: the
//! skin type the shopper picked and the scent. Both are open-ended strings
//! coming from catalog data, with sentinel values meaning "no constraint":
//! `"all"` for skin type and `"none"` for scent (accessories carry no scent).
//!
//! Two add-to-cart requests refer to the same line item exactly when their
//! [`VariantKey`] triples are equal.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Skin type variant selector (e.g., "oily", "dry", "sensitive").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkinType(String);

impl SkinType {
    /// Sentinel meaning the product suits every skin type.
    pub const ALL: &'static str = "all";

    /// Create a skin type selector.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Selector that places no constraint on skin type.
    #[must_use]
    pub fn any() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this selector is the "no constraint" sentinel.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SkinType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Scent variant selector (e.g., "unscented", "herbal", "lavender").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scent(String);

impl Scent {
    /// Sentinel for products that carry no scent at all (accessories).
    pub const NONE: &'static str = "none";

    /// Create a scent selector.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Selector for scentless products.
    #[must_use]
    pub fn none() -> Self {
        Self(Self::NONE.to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this selector is the "no scent" sentinel.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.0 == Self::NONE
    }
}

impl std::fmt::Display for Scent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Scent {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The `(product, skin type, scent)` triple that identifies a purchasable
/// configuration. Cart merge decisions compare these keys for exact equality,
/// sentinels included: "all" only matches "all".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub product_id: ProductId,
    pub skin_type: SkinType,
    pub scent: Scent,
}

impl VariantKey {
    /// Build a variant key from its parts.
    #[must_use]
    pub const fn new(product_id: ProductId, skin_type: SkinType, scent: Scent) -> Self {
        Self {
            product_id,
            skin_type,
            scent,
        }
    }
}
