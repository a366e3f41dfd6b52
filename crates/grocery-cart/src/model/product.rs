//! Products in the grocery catalog.
//!
//! # Record store
//! [`Product`] implements [`ActorEntity`](resource_actor::ActorEntity) and is kept by
//! a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! A product carries two identifiers that must never be confused:
//! - [`ProductId`] is the business id typed in by whoever created the product (a
//!   barcode, say). The quantity ledger and the cart key on it.
//! - [`RecordKey`] is assigned by the store. Updates and deletes are addressed by it
//!   and by nothing else.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Business identifier of a product. Not guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage key assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey(pub u32);

impl From<u32> for RecordKey {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record_{}", self.0)
    }
}

/// A price exactly as it was entered, e.g. `"$3.65"`.
///
/// Deliberately opaque: there is no numeric accessor and no arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Price {
    fn from(price: &str) -> Self {
        Self::new(price)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub record_key: RecordKey,
    pub id: ProductId,
    pub product_name: String,
    pub brand: String,
    pub image: Option<String>,
    pub price: Price,
}

impl Product {
    /// Builds a product from its store key and field values.
    ///
    /// No validation happens here; the store validates on create.
    pub fn new(record_key: RecordKey, fields: ProductFields) -> Self {
        Self {
            record_key,
            id: fields.id,
            product_name: fields.product_name,
            brand: fields.brand,
            image: fields.image.filter(|image| !image.trim().is_empty()),
            price: fields.price,
        }
    }

    /// The editable fields of this product, without its store key.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            id: self.id.clone(),
            product_name: self.product_name.clone(),
            brand: self.brand.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
        }
    }
}

/// One editable field of a product, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    ProductName,
    Brand,
    Image,
    Price,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::ProductName,
        ProductField::Brand,
        ProductField::Image,
        ProductField::Price,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::ProductName => "productName",
            ProductField::Brand => "brand",
            ProductField::Image => "image",
            ProductField::Price => "price",
        }
    }

    /// Fields a product cannot be created without.
    pub fn is_required(self) -> bool {
        !matches!(self, ProductField::Image)
    }
}

impl Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Field values of a product without its store key.
///
/// Used as the create payload, as the staged values of the edit form, and as the
/// shape of seed files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub id: ProductId,
    pub product_name: String,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price: Price,
}

impl ProductFields {
    /// Overwrites one field. A blank image clears it.
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Id => self.id = ProductId(value),
            ProductField::ProductName => self.product_name = value,
            ProductField::Brand => self.brand = value,
            ProductField::Image => {
                self.image = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
            ProductField::Price => self.price = Price(value),
        }
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Id => self.id.as_str(),
            ProductField::ProductName => &self.product_name,
            ProductField::Brand => &self.brand,
            ProductField::Image => self.image.as_deref().unwrap_or(""),
            ProductField::Price => self.price.as_str(),
        }
    }

    /// Required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }
}

/// Patch applied by the store on update. `None` leaves a field unchanged;
/// `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub id: Option<ProductId>,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub image: Option<Option<String>>,
    pub price: Option<Price>,
}

impl From<ProductFields> for ProductUpdate {
    /// Full replacement of every editable field.
    fn from(fields: ProductFields) -> Self {
        Self {
            id: Some(fields.id),
            product_name: Some(fields.product_name),
            brand: Some(fields.brand),
            image: Some(fields.image.filter(|image| !image.trim().is_empty())),
            price: Some(fields.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip_through_product() {
        let fields = ProductFields {
            id: "0001".into(),
            product_name: "Bananas".into(),
            brand: "Dole".into(),
            image: Some("bananas.png".into()),
            price: "$0.49".into(),
        };
        let product = Product::new(RecordKey(4), fields.clone());
        assert_eq!(product.fields(), fields);
        assert_eq!(product.record_key.to_string(), "record_4");
    }

    #[test]
    fn test_blank_image_is_absent() {
        let mut fields = ProductFields::default();
        fields.set(ProductField::Image, "   ");
        assert_eq!(fields.image, None);

        fields.set(ProductField::Image, "kale.jpg");
        assert_eq!(fields.get(ProductField::Image), "kale.jpg");
    }

    #[test]
    fn test_missing_required_ignores_image() {
        let mut fields = ProductFields::default();
        fields.set(ProductField::ProductName, "Milk");
        fields.set(ProductField::Price, " ");

        assert_eq!(
            fields.missing_required(),
            vec![ProductField::Id, ProductField::Brand, ProductField::Price]
        );
    }

    #[test]
    fn test_price_is_kept_verbatim() {
        let fields: ProductFields = serde_json::from_str(
            r#"{"id":"9","productName":"Tea","brand":"Tetley","price":"CA$ 4,50"}"#,
        )
        .unwrap();
        assert_eq!(fields.price.as_str(), "CA$ 4,50");
        assert_eq!(fields.image, None);

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["productName"], "Tea");
        assert_eq!(json["price"], "CA$ 4,50");
    }
}
