//! Catalog records and the payloads used to create and edit them.

pub mod product;

pub use product::*;
