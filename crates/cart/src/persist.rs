//! Persistence adapter between the cart state and durable storage.
//!
//! Only the items collection is persisted; the UI visibility flag is
//! deliberately excluded. Every load path degrades to an empty cart instead
//! of failing, and the first write failure switches the session to
//! in-memory-only operation, so no cart mutation can ever surface a
//! persistence error to its caller.

use serde::{Deserialize, Serialize};

use crate::item::CartLineItem;
use crate::state::CartState;
use crate::storage::Storage;

/// Storage key the web client has always used for the cart document.
pub const DEFAULT_CART_KEY: &str = "lumora-cart";

/// Current on-disk document version.
const FORMAT_VERSION: u32 = 1;

/// The persisted document: a version tag plus the line items, nothing else.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
    version: u32,
    items: Vec<CartLineItem>,
}

/// Write-through adapter owning the storage backend and the cart's key.
#[derive(Debug)]
pub struct CartPersistence<S: Storage> {
    storage: S,
    key: String,
    /// Set after the first failed write; further writes are skipped for the
    /// rest of the session.
    disabled: bool,
}

impl<S: Storage> CartPersistence<S> {
    /// Adapter writing under the given key.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            disabled: false,
        }
    }

    /// Adapter writing under [`DEFAULT_CART_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_CART_KEY)
    }

    /// Restore the persisted cart state.
    ///
    /// A missing entry, unreadable backend, malformed document, or unknown
    /// format version all produce an empty cart; none of them are errors the
    /// application can act on.
    pub fn load(&self) -> CartState {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CartState::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart storage unreadable, starting empty");
                return CartState::new();
            }
        };

        match serde_json::from_str::<PersistedCart>(&raw) {
            Ok(doc) if doc.version == FORMAT_VERSION => CartState::from_items(doc.items),
            Ok(doc) => {
                tracing::warn!(
                    key = %self.key,
                    version = doc.version,
                    "unknown cart document version, starting empty"
                );
                CartState::new()
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "malformed cart document, starting empty");
                CartState::new()
            }
        }
    }

    /// Persist the current items collection.
    ///
    /// Fire-and-forget from the caller's perspective: failures are logged and
    /// disable persistence for the remainder of the session.
    pub fn save(&mut self, state: &CartState) {
        if self.disabled {
            return;
        }

        let doc = PersistedCart {
            version: FORMAT_VERSION,
            items: state.items().to_vec(),
        };
        let raw = match serde_json::to_string(&doc) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "failed to serialize cart document");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &raw) {
            tracing::warn!(
                key = %self.key,
                error = %err,
                "cart write failed, continuing in-memory only"
            );
            self.disabled = true;
        }
    }

    /// Whether writes have been disabled after a storage failure.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.disabled
    }

    /// The storage key this adapter writes under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
