//! Lumora Cart - Shopper cart state container.
//!
//! The cart is the one genuinely stateful component of the storefront: an
//! ordered collection of line items with merge-by-variant semantics, derived
//! totals, and best-effort persistence to durable client-side storage.
//!
//! # Architecture
//!
//! - [`state`] holds the pure reducer: `CartState::apply(CartAction)` is a
//!   total state-transition function with no I/O, so every invariant is unit
//!   testable without a storage backend.
//! - [`store`] wraps the reducer in a [`CartStore`] facade that owns the
//!   state, an injected [`IdGenerator`], and a persistence adapter. There is
//!   no hidden singleton; callers construct stores explicitly.
//! - [`persist`] serializes the items collection (and nothing else) as a
//!   single JSON document per storage key. Storage failures degrade the
//!   session to in-memory-only operation instead of surfacing errors.
//! - [`storage`] defines the `get`/`set`/`remove` abstraction with in-memory
//!   and file-backed implementations.
//!
//! # Invariants
//!
//! - At most one line item per distinct `(product, skin type, scent)` triple;
//!   adding a matching triple merges quantities into the existing line.
//! - Every stored line item has `quantity >= 1`; a quantity update to zero or
//!   below removes the line entirely.
//! - Totals are derived, never stored.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ids;
pub mod item;
pub mod persist;
pub mod state;
pub mod storage;
pub mod store;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use item::{CartLineItem, LineItemDraft};
pub use persist::{CartPersistence, DEFAULT_CART_KEY};
pub use state::{CartAction, CartState};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
