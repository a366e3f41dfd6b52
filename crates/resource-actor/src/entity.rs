//! # ActorEntity Trait
//!
//! The contract a record type fulfils to be stored by a [`ResourceActor`](crate::ResourceActor):
//! its key type, the payloads used to create and update it, the context injected into
//! its hooks, and its error type.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement.
///
/// Associated types keep the payloads apart: a product store only accepts product
/// create and update payloads, and the compiler rejects anything else.
///
/// # Keys
/// The store assigns keys itself from a counter starting at 1, so `Id` must be
/// constructible `From<u32>`. Keys are ordered; since they only ever grow, iterating
/// the store in key order is iterating it in insertion order.
///
/// # Hooks
/// `on_create` and `on_delete` default to `Ok(())`. `on_update` is required because
/// every record type decides for itself how a patch applies.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Storage key assigned by the store.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a record.
    type Create: Send + Sync + Debug;

    /// Payload for patching a record.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into the hooks at `run()` time. Use `()` for none.
    type Context: Send + Sync;

    /// Error reported when a payload is rejected.
    ///
    /// One error type per record type rather than one per operation; callers match
    /// on a single enum.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its freshly assigned key and the create payload.
    /// Validation of required fields belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after `from_create_params`, before the record is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the record is removed. An error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
