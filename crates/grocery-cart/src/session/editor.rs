//! # Edit Session
//!
//! State of the product form: either creating a new product or editing an existing
//! one, plus the field values typed in so far.

use crate::model::{Product, ProductField, ProductFields, RecordKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    /// Editing the record stored under this key.
    Editing(RecordKey),
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    staged: ProductFields,
}

impl EditSession {
    /// A fresh session in [`EditMode::Creating`] with empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_create(&mut self) {
        self.mode = EditMode::Creating;
        self.staged = ProductFields::default();
    }

    /// Loads every field of `product` and remembers its record key.
    pub fn start_edit(&mut self, product: &Product) {
        self.mode = EditMode::Editing(product.record_key);
        self.staged = product.fields();
    }

    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.staged.set(field, value);
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn staged(&self) -> &ProductFields {
        &self.staged
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn target_key(&self) -> Option<RecordKey> {
        match self.mode {
            EditMode::Creating => None,
            EditMode::Editing(key) => Some(key),
        }
    }
}
