//! # Grocery Cart
//!
//! A product catalog and shopping cart on top of an in-process record store.
//!
//! - [`product_actor`] - the store: a [`ResourceActor`](resource_actor::ResourceActor)
//!   holding [`Product`](model::Product) records
//! - [`clients`] - the [`CatalogService`](clients::CatalogService) contract and the
//!   [`ProductClient`](clients::ProductClient) that implements it
//! - [`session`] - catalog cache, quantity ledger, cart and edit form of one user
//! - [`lifecycle`] - starting and stopping the store, logging setup
//! - [`config`] - environment configuration and seed files
//! - [`view`] - text rendering for the demo binary

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod session;
pub mod view;
