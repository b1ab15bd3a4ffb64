//! Lumora Core - Shared types library.
//!
//! This crate provides common types used across all Lumora components:
//! - `catalog` - In-memory product catalog with seeded mock data
//! - `cart` - Shopper cart state container
//! - `cli` - Command-line storefront surface
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, variant selectors,
//!   and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
