//! # System Lifecycle
//!
//! Starting and stopping the product store, and installing logging.
//!
//! [`CatalogSystem::new`] creates the store actor, spawns it on the Tokio runtime and
//! keeps a [`ProductClient`](crate::clients::ProductClient) for it. Sessions get
//! their own clone of that client.
//!
//! ## Shutdown
//!
//! The store stops when the last client is dropped: its `receiver.recv()` returns
//! `None`, the run loop logs its final record count and exits.
//! [`CatalogSystem::shutdown`] drops the system's own client and awaits the task, so
//! all sessions must be gone by then.
//!
//! ## Logging
//!
//! See [`setup_tracing`].

pub mod catalog_system;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::tracing::*;
