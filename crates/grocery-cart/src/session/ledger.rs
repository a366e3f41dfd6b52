//! # Quantity Ledger
//!
//! The quantities a user has staged on the product list but not yet added to the
//! cart. Derived from the catalog: every refresh rebuilds it from scratch with all
//! quantities at zero, and anything staged before the refresh is gone.

use crate::model::{Product, ProductId};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub id: ProductId,
    pub quantity: u32,
}

/// One staged quantity per catalog product, keyed by business id.
#[derive(Debug, Clone, Default)]
pub struct QuantityLedger {
    entries: Vec<LedgerEntry>,
}

impl QuantityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every entry with a zero entry per product in `catalog`.
    ///
    /// Products sharing a business id share one entry.
    pub fn rebuild(&mut self, catalog: &[Product]) {
        let mut entries: Vec<LedgerEntry> = Vec::with_capacity(catalog.len());
        for product in catalog {
            if entries.iter().any(|entry| entry.id == product.id) {
                warn!(id = %product.id, key = %product.record_key, "Duplicate business id in catalog");
                continue;
            }
            entries.push(LedgerEntry {
                id: product.id.clone(),
                quantity: 0,
            });
        }
        self.entries = entries;
    }

    /// Adds one. Returns the new quantity, or `None` for an unknown id.
    pub fn increment(&mut self, id: &ProductId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.quantity = entry.quantity.saturating_add(1);
        Some(entry.quantity)
    }

    /// Removes one, stopping at zero. Returns the new quantity, or `None` for an
    /// unknown id.
    pub fn decrement(&mut self, id: &ProductId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.quantity = entry.quantity.saturating_sub(1);
        Some(entry.quantity)
    }

    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.quantity)
    }

    /// Resets the entry to zero and returns what it held.
    pub fn take(&mut self, id: &ProductId) -> Option<u32> {
        self.entry_mut(id).map(|entry| std::mem::take(&mut entry.quantity))
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &ProductId) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|entry| &entry.id == id)
    }
}
