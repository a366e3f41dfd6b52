//! [`ActorEntity`] implementation that lets the record store keep [`Product`]s.
//!
//! Creating a product validates the required fields. Updates are patches and are
//! applied as given, the same way the catalog backend has always treated them.

use super::error::ProductError;
use crate::model::{Product, ProductFields, ProductUpdate, RecordKey};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = RecordKey;
    type Create = ProductFields;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    /// Rejects the payload if `id`, `productName`, `brand` or `price` is blank.
    fn from_create_params(id: RecordKey, params: ProductFields) -> Result<Self, Self::Error> {
        let missing = params.missing_required();
        if !missing.is_empty() {
            return Err(ProductError::MissingFields(missing));
        }
        Ok(Product::new(id, params))
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }
}
