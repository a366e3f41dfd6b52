//! Plain-text rendering of a session, one line per product or cart entry.

use crate::clients::CatalogService;
use crate::session::{Cart, CatalogSession};

/// The product list with the quantity staged for each product.
///
/// ```text
/// [record_1] 0001 Bananas (Dole) $0.49  qty 2
/// ```
pub fn render_catalog<S: CatalogService>(session: &CatalogSession<S>) -> Vec<String> {
    session
        .catalog()
        .products()
        .iter()
        .map(|product| {
            let staged = session.ledger().quantity(&product.id).unwrap_or(0);
            format!(
                "[{}] {} {} ({}) {}  qty {}",
                product.record_key,
                product.id,
                product.product_name,
                product.brand,
                product.price,
                staged
            )
        })
        .collect()
}

/// The cart entries followed by a summary line with the badge count.
pub fn render_cart(cart: &Cart) -> Vec<String> {
    let mut lines: Vec<String> = cart
        .entries()
        .iter()
        .map(|entry| {
            let product = entry.product();
            format!(
                "{} x {} ({}) {} each",
                entry.quantity(),
                product.product_name,
                product.brand,
                product.price
            )
        })
        .collect();
    lines.push(format!(
        "Cart: {} products, {} items",
        cart.len(),
        cart.total_units()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductFields, RecordKey};

    #[test]
    fn test_render_cart_lists_entries_and_badge() {
        let product = Product::new(
            RecordKey(3),
            ProductFields {
                id: "0003".into(),
                product_name: "Eggs".into(),
                brand: "Happy Hens".into(),
                image: None,
                price: "$5.10".into(),
            },
        );
        let mut cart = Cart::new();
        cart.commit(&product, 2).unwrap();

        assert_eq!(
            render_cart(&cart),
            vec![
                "2 x Eggs (Happy Hens) $5.10 each".to_string(),
                "Cart: 1 products, 2 items".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_empty_cart() {
        assert_eq!(render_cart(&Cart::new()), vec!["Cart: 0 products, 0 items"]);
    }
}
