//! Client-side snapshot of the remote catalog.

use crate::model::{Product, ProductId, RecordKey};

/// The products as last fetched, in the order the service returned them.
///
/// Only ever replaced as a whole; there is no way to patch a single entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    products: Vec<Product>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly fetched catalog.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product carrying the business id `id`.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn find_by_key(&self, key: RecordKey) -> Option<&Product> {
        self.products.iter().find(|product| product.record_key == key)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
