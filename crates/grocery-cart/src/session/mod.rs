//! # Catalog Session
//!
//! Everything one user works with between starting the app and closing it:
//!
//! - [`cache`] - the catalog as last fetched from the service
//! - [`ledger`] - quantities staged on the product list
//! - [`cart`] - what has been committed to the cart
//! - [`editor`] - the product form
//!
//! [`CatalogSession`] owns all four and keeps them consistent. Every mutation takes
//! `&mut self`, so a session has exactly one writer and needs no locks. Independent
//! sessions can share a service by holding clones of the same client.
//!
//! ## Refresh
//!
//! A refresh replaces the cache wholesale and rebuilds the ledger with zero
//! quantities; a failed refresh changes neither. Create, update and delete all end
//! with a refresh so the cache reflects the write. The cart is never touched by a
//! refresh.
//!
//! ## Failures
//!
//! Service errors are logged, written to [`status`](CatalogSession::status) and
//! returned. None of them ends the session and nothing is retried automatically.

pub mod cache;
pub mod cart;
pub mod editor;
pub mod ledger;

pub use cache::CatalogCache;
pub use cart::{Cart, CartEntry, CommitOutcome, Step};
pub use editor::{EditMode, EditSession};
pub use ledger::{LedgerEntry, QuantityLedger};

use crate::clients::CatalogService;
use crate::error::CatalogError;
use crate::model::{Product, ProductField, ProductId, RecordKey};
use tracing::{debug, info, instrument, warn};

pub struct CatalogSession<S: CatalogService> {
    service: S,
    catalog: CatalogCache,
    ledger: QuantityLedger,
    cart: Cart,
    editor: EditSession,
    status: Option<String>,
}

impl<S: CatalogService> CatalogSession<S> {
    /// Starts with an empty catalog. Call [`refresh`](Self::refresh) to load it.
    pub fn new(service: S) -> Self {
        Self {
            service,
            catalog: CatalogCache::new(),
            ledger: QuantityLedger::new(),
            cart: Cart::new(),
            editor: EditSession::new(),
            status: None,
        }
    }

    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    pub fn ledger(&self) -> &QuantityLedger {
        &self.ledger
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn editor(&self) -> &EditSession {
        &self.editor
    }

    /// Last message worth showing the user: a service confirmation or an error.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the catalog and rebuilds the ledger. Returns the number of products.
    ///
    /// Staged quantities are lost on success. On failure cache and ledger are left
    /// exactly as they were.
    pub async fn refresh(&mut self) -> Result<usize, CatalogError> {
        self.reload().await.inspect_err(|e| {
            self.status = Some(e.to_string());
        })
    }

    // ---------------------------------------------------------------------
    // Quantity ledger
    // ---------------------------------------------------------------------

    /// Stages one more unit. `None` if the product is not in the catalog.
    pub fn increment(&mut self, id: &ProductId) -> Option<u32> {
        self.ledger.increment(id)
    }

    /// Stages one unit less, never below zero.
    pub fn decrement(&mut self, id: &ProductId) -> Option<u32> {
        self.ledger.decrement(id)
    }

    // ---------------------------------------------------------------------
    // Cart
    // ---------------------------------------------------------------------

    /// Moves the staged quantity of `id` into the cart and resets it to zero.
    ///
    /// Unknown products are ignored. Nothing staged is reported as
    /// [`CatalogError::QuantityNotSelected`].
    pub fn commit_to_cart(&mut self, id: &ProductId) -> Result<CommitOutcome, CatalogError> {
        let (Some(product), Some(staged)) = (self.catalog.find(id), self.ledger.quantity(id))
        else {
            debug!(%id, "Commit for unknown product ignored");
            return Ok(CommitOutcome::Ignored);
        };

        match self.cart.commit(product, staged) {
            Ok(outcome) => {
                self.ledger.take(id);
                info!(%id, ?outcome, "Committed to cart");
                Ok(outcome)
            }
            Err(e) => {
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn adjust_cart_quantity(&mut self, id: &ProductId, step: Step) -> Option<u32> {
        self.cart.adjust(id, step)
    }

    /// Removing a product that is not in the cart is a no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if self.cart.remove(id) {
            debug!(%id, "Removed from cart");
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // ---------------------------------------------------------------------
    // Edit session
    // ---------------------------------------------------------------------

    pub fn start_create(&mut self) {
        self.editor.start_create();
    }

    pub fn start_edit(&mut self, product: &Product) {
        self.editor.start_edit(product);
    }

    pub fn stage_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.editor.set_field(field, value);
    }

    /// Sends the staged fields to the service: a create in
    /// [`EditMode::Creating`], an update of the target record in
    /// [`EditMode::Editing`].
    ///
    /// On success the form is reset and the catalog refreshed. On failure the staged
    /// fields stay as they are so they can be corrected and resubmitted.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<String, CatalogError> {
        let mode = self.editor.mode();
        let fields = self.editor.staged().clone();
        debug!(?mode, ?fields, "Submitting product form");
        let result = match mode {
            EditMode::Creating => self.service.create_product(fields).await,
            EditMode::Editing(key) => self.service.update_by_key(key, fields).await,
        };

        match result {
            Ok(message) => {
                info!(%message, "Submit accepted");
                self.editor.start_create();
                self.finish_write(message).await
            }
            Err(e) => {
                warn!(error = %e, "Submit failed");
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Deletes the record stored under `key`, then refreshes the catalog.
    #[instrument(skip(self))]
    pub async fn delete_product(&mut self, key: RecordKey) -> Result<String, CatalogError> {
        match self.service.delete_by_key(key).await {
            Ok(message) => {
                info!(%message, "Delete accepted");
                self.finish_write(message).await
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// A write already succeeded, so a failing refresh afterwards only leaves the
    /// catalog stale and is not reported as a failure of the write.
    async fn finish_write(&mut self, message: String) -> Result<String, CatalogError> {
        if let Err(e) = self.reload().await {
            warn!(error = %e, "Catalog refresh after write failed");
        }
        self.status = Some(message.clone());
        Ok(message)
    }

    async fn reload(&mut self) -> Result<usize, CatalogError> {
        match self.service.list_products().await {
            Ok(products) => {
                self.ledger.rebuild(&products);
                self.catalog.replace(products);
                info!(products = self.catalog.len(), "Catalog refreshed");
                Ok(self.catalog.len())
            }
            Err(e) => {
                warn!(error = %e, "Catalog refresh failed");
                Err(e)
            }
        }
    }
}
