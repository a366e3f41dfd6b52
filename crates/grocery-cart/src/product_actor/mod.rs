//! # Product Store
//!
//! The record store behind the catalog: a [`ResourceActor`] holding [`Product`]s.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], returned when a create payload is incomplete
//! - [`new()`] - creates the actor and a [`ProductClient`] for it
//!
//! ```rust
//! use grocery_cart::clients::CatalogService;
//! use grocery_cart::model::ProductFields;
//! use grocery_cart::product_actor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let fields = ProductFields {
//!         id: "0001".into(),
//!         product_name: "Bananas".into(),
//!         brand: "Dole".into(),
//!         image: None,
//!         price: "$0.49".into(),
//!     };
//!     let message = client.create_product(fields).await.unwrap();
//!     assert_eq!(message, "Product added successfully");
//!     assert_eq!(client.list_products().await.unwrap().len(), 1);
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates the product store actor and a client connected to it.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
