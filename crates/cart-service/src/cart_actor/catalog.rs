//! The default product catalog and the cart seeded from it.

use crate::model::{CartItem, Product};

/// The products every fresh cart starts with.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Bike", 499),
        Product::new(2, "Tire", 19),
        Product::new(3, "Sport Shoes", 129),
        Product::new(4, "Cap", 13),
        Product::new(5, "Tools", 99),
    ]
}

/// One unit of each catalog product. Line ids follow catalog order starting at 0.
pub fn seed_cart(catalog: &[Product]) -> Vec<CartItem> {
    catalog
        .iter()
        .zip(0u32..)
        .map(|(product, id)| CartItem::new(id, product.clone(), 1))
        .collect()
}
