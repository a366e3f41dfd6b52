//! The catalog service interface and the client that implements it over the
//! product store.

pub mod catalog_service;
pub mod product_client;

pub use catalog_service::*;
pub use product_client::*;
