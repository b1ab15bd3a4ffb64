//! Core types for Lumora.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;
pub mod variant;

pub use id::*;
pub use price::Price;
pub use status::*;
pub use variant::{Scent, SkinType, VariantKey};
