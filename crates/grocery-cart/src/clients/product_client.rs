//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and exposes it as a [`CatalogService`].
use crate::clients::CatalogService;
use crate::error::CatalogError;
use crate::model::{Product, ProductFields, ProductUpdate, RecordKey};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

pub const ADDED: &str = "Product added successfully";
pub const UPDATED: &str = "Product updated successfully";
pub const DELETED: &str = "Product deleted successfully";

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(rejected) = e.entity_error::<ProductError>() {
            return CatalogError::ValidationRejected(rejected.to_string());
        }
        match e {
            FrameworkError::NotFound(key) => CatalogError::NotFound(key),
            other => CatalogError::RemoteUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl CatalogService for ProductClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        ActorClient::list(self).await
    }

    #[instrument(skip(self))]
    async fn create_product(&self, fields: ProductFields) -> Result<String, CatalogError> {
        debug!("Sending request");
        let key = self.inner.create(fields).await.map_err(Self::map_error)?;
        debug!(%key, "Product stored");
        Ok(ADDED.to_string())
    }

    #[instrument(skip(self, fields))]
    async fn update_by_key(
        &self,
        key: RecordKey,
        fields: ProductFields,
    ) -> Result<String, CatalogError> {
        debug!(?fields, "Sending request");
        self.inner
            .update(key, ProductUpdate::from(fields))
            .await
            .map_err(Self::map_error)?;
        Ok(UPDATED.to_string())
    }

    #[instrument(skip(self))]
    async fn delete_by_key(&self, key: RecordKey) -> Result<String, CatalogError> {
        ActorClient::delete(self, key).await?;
        Ok(DELETED.to_string())
    }
}
