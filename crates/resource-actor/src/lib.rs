//! # Resource Actor
//!
//! An in-process record store built on the actor model. One Tokio task owns the
//! records of a single entity type and serves `Create / Get / List / Update / Delete`
//! requests sent over a channel, one at a time. Callers talk to it through a cheap,
//! cloneable [`ResourceClient`].
//!
//! The store plays the part of a document database for the grocery catalog: it assigns
//! every record a storage key, keeps records in insertion order, validates payloads
//! through the entity's hooks, and reports unknown keys as [`FrameworkError::NotFound`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - what a record looks like and how it validates
//!    creates and applies updates.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop that owns the records.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Aisle {
//!     key: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct AisleCreate { name: String }
//! #[derive(Debug)] struct AisleUpdate { name: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("aisle name is required")] struct AisleError;
//!
//! #[async_trait]
//! impl ActorEntity for Aisle {
//!     type Id = u32;
//!     type Create = AisleCreate;
//!     type Update = AisleUpdate;
//!     type Context = ();
//!     type Error = AisleError;
//!
//!     fn from_create_params(key: u32, params: AisleCreate) -> Result<Self, Self::Error> {
//!         if params.name.is_empty() {
//!             return Err(AisleError);
//!         }
//!         Ok(Self { key, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: AisleUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Aisle>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let key = client.create(AisleCreate { name: "Produce".into() }).await.unwrap();
//!     let aisles = client.list().await.unwrap();
//!     assert_eq!(aisles.len(), 1);
//!     assert_eq!(aisles[0].key, key);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Each actor processes its requests sequentially, so the record map needs no lock.
//! Every write is applied before the next request is read, which makes it visible to
//! the very next `List`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] whose requests are answered
//! from a queue of expectations instead of a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
