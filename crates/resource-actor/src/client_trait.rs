//! # ActorClient Trait
//!
//! Shared read/delete plumbing for domain clients that wrap a [`ResourceClient`].
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain-specific clients built on a [`ResourceClient`].
///
/// A wrapper supplies its inner client and a mapping from [`FrameworkError`] into its
/// own error type, and gets `get`, `list` and `delete` for free. Operations that need
/// payload conversion (create, update) stay on the wrapper itself.
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shelf { key: u32 }
/// #[derive(Debug)] struct ShelfCreate;
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ShelfError(String);
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = u32; type Create = ShelfCreate; type Update = ShelfUpdate;
///     type Context = (); type Error = ShelfError;
///     fn from_create_params(key: u32, _: ShelfCreate) -> Result<Self, ShelfError> { Ok(Self { key }) }
///     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), ShelfError> { Ok(()) }
/// }
///
/// struct ShelfClient { inner: ResourceClient<Shelf> }
///
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///     fn inner(&self) -> &ResourceClient<Shelf> { &self.inner }
///     fn map_error(e: FrameworkError) -> ShelfError { ShelfError(e.to_string()) }
/// }
///
/// async fn shelves(client: &ShelfClient) -> Result<usize, ShelfError> {
///     Ok(client.list().await?.len())
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The wrapper's error type.
    type Error: Send + Sync;

    /// The generic client being wrapped.
    fn inner(&self) -> &ResourceClient<T>;

    /// Converts store errors into the wrapper's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetches one record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetches every record in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Removes one record by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
