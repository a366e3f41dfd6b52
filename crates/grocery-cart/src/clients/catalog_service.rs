//! # Catalog Service
//!
//! The four remote operations the client session relies on.

use crate::error::CatalogError;
use crate::model::{Product, ProductFields, RecordKey};
use async_trait::async_trait;

/// Remote catalog of product records.
///
/// Writes return the service's human-readable confirmation. Update and delete are
/// addressed by [`RecordKey`] only; the business id is just another field.
///
/// Implementations must make every successful write visible to the next
/// [`list_products`](CatalogService::list_products).
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products, in the order the service keeps them.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fails with [`CatalogError::ValidationRejected`] when a required field is blank.
    async fn create_product(&self, fields: ProductFields) -> Result<String, CatalogError>;

    /// Fails with [`CatalogError::NotFound`] when `key` does not resolve.
    async fn update_by_key(
        &self,
        key: RecordKey,
        fields: ProductFields,
    ) -> Result<String, CatalogError>;

    /// Fails with [`CatalogError::NotFound`] when `key` does not resolve.
    async fn delete_by_key(&self, key: RecordKey) -> Result<String, CatalogError>;
}
