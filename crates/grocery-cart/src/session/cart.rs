//! # Cart Assembler
//!
//! The cart is an ordered list of entries, at most one per business id. Entries are
//! added by committing a staged quantity from the ledger; committing a product that
//! is already in the cart merges into its entry instead of appending a second one.
//!
//! An entry holds its own copy of the product, so refreshing the catalog or editing
//! the product afterwards does not change what is in the cart.

use crate::error::CatalogError;
use crate::model::{Product, ProductId};

/// Direction of a single cart stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    product: Product,
    quantity: u32,
}

impl CartEntry {
    /// Snapshot of the product taken when it was first committed.
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// What a successful commit did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing happened: the product or its ledger entry is unknown.
    Ignored,
    /// A new entry was appended with this quantity.
    Added { quantity: u32 },
    /// An existing entry grew to this quantity.
    Merged { quantity: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `staged` units of `product` into the cart.
    ///
    /// A zero quantity is refused with [`CatalogError::QuantityNotSelected`] and
    /// leaves the cart as it was, whether or not the product is already in it.
    pub fn commit(&mut self, product: &Product, staged: u32) -> Result<CommitOutcome, CatalogError> {
        if staged == 0 {
            return Err(CatalogError::QuantityNotSelected(
                product.product_name.clone(),
            ));
        }

        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(staged);
            return Ok(CommitOutcome::Merged {
                quantity: entry.quantity,
            });
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: staged,
        });
        Ok(CommitOutcome::Added { quantity: staged })
    }

    /// Steps the quantity of an entry. Stepping down never goes below 1; use
    /// [`remove`](Self::remove) to take a product out.
    ///
    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn adjust(&mut self, id: &ProductId, step: Step) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.quantity = match step {
            Step::Up => entry.quantity.saturating_add(1),
            Step::Down => entry.quantity.saturating_sub(1).max(1),
        };
        Some(entry.quantity)
    }

    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.product.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| &entry.product.id == id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry quantities.
    pub fn total_units(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    fn entry_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| &entry.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductFields, RecordKey};

    fn product(key: u32, id: &str, name: &str) -> Product {
        Product::new(
            RecordKey(key),
            ProductFields {
                id: id.into(),
                product_name: name.into(),
                brand: "Brand".into(),
                image: None,
                price: "$2.00".into(),
            },
        )
    }

    #[test]
    fn test_commit_appends_then_merges() {
        let apples = product(1, "a1", "Apples");
        let mut cart = Cart::new();

        assert_eq!(cart.commit(&apples, 2), Ok(CommitOutcome::Added { quantity: 2 }));
        assert_eq!(cart.commit(&apples, 3), Ok(CommitOutcome::Merged { quantity: 5 }));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&apples.id).map(CartEntry::quantity), Some(5));
    }

    #[test]
    fn test_zero_quantity_is_rejected_and_cart_untouched() {
        let apples = product(1, "a1", "Apples");
        let mut cart = Cart::new();

        assert_eq!(
            cart.commit(&apples, 0),
            Err(CatalogError::QuantityNotSelected("Apples".into()))
        );
        assert!(cart.is_empty());

        cart.commit(&apples, 1).unwrap();
        assert_eq!(
            cart.commit(&apples, 0),
            Err(CatalogError::QuantityNotSelected("Apples".into()))
        );
        assert_eq!(cart.get(&apples.id).unwrap().quantity(), 1);
    }

    #[test]
    fn test_entries_keep_commit_order() {
        let mut cart = Cart::new();
        cart.commit(&product(2, "b1", "Bread"), 1).unwrap();
        cart.commit(&product(1, "a1", "Apples"), 4).unwrap();
        cart.commit(&product(2, "b1", "Bread"), 1).unwrap();

        let ids: Vec<&str> = cart
            .entries()
            .iter()
            .map(|entry| entry.product().id.as_str())
            .collect();
        assert_eq!(ids, vec!["b1", "a1"]);
        assert_eq!(cart.total_units(), 6);
    }

    #[test]
    fn test_entry_is_a_snapshot() {
        let mut apples = product(1, "a1", "Apples");
        let mut cart = Cart::new();
        cart.commit(&apples, 1).unwrap();

        apples.product_name = "Green Apples".into();
        cart.commit(&apples, 1).unwrap();

        let entry = cart.get(&apples.id).unwrap();
        assert_eq!(entry.product().product_name, "Apples");
        assert_eq!(entry.quantity(), 2);
    }

    #[test]
    fn test_adjust_down_stops_at_one() {
        let apples = product(1, "a1", "Apples");
        let mut cart = Cart::new();
        cart.commit(&apples, 2).unwrap();

        assert_eq!(cart.adjust(&apples.id, Step::Down), Some(1));
        assert_eq!(cart.adjust(&apples.id, Step::Down), Some(1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.adjust(&apples.id, Step::Up), Some(2));
        assert_eq!(cart.adjust(&"zz".into(), Step::Up), None);
    }

    #[test]
    fn test_remove_is_idempotent_and_clear_empties() {
        let mut cart = Cart::new();
        cart.commit(&product(1, "a1", "Apples"), 1).unwrap();
        cart.commit(&product(2, "b1", "Bread"), 1).unwrap();

        assert!(cart.remove(&"a1".into()));
        assert!(!cart.remove(&"a1".into()));
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_units(), 0);
    }
}
