//! Error types for the product store.

use crate::model::ProductField;
use thiserror::Error;

/// Reasons the product store rejects a payload.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// One or more required fields were blank.
    #[error("Product validation failed: missing {}", join_fields(.0))]
    MissingFields(Vec<ProductField>),
}

fn join_fields(fields: &[ProductField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_fields() {
        let err = ProductError::MissingFields(vec![ProductField::Brand, ProductField::Price]);
        assert_eq!(
            err.to_string(),
            "Product validation failed: missing brand, price"
        );
    }
}
