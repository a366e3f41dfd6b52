//! # Catalog Errors
//!
//! What can go wrong between the user's session and the catalog service. Every
//! variant is recoverable: the session keeps running and the user decides what to
//! try next.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The service could not be reached or failed to answer. Retry by hand.
    #[error("Catalog service unavailable: {0}")]
    RemoteUnavailable(String),

    /// The service refused a submission. Correct the fields and resubmit.
    #[error("{0}")]
    ValidationRejected(String),

    /// No record under the given key, usually because the catalog is stale.
    /// Refresh and retry.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Add-to-cart with nothing staged. Carries the product name.
    #[error("Please select quantity for {0}")]
    QuantityNotSelected(String),
}

impl CatalogError {
    /// True for failures reported by (or on the way to) the catalog service.
    pub fn is_remote(&self) -> bool {
        !matches!(self, CatalogError::QuantityNotSelected(_))
    }
}
