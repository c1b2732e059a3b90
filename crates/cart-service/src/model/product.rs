use serde::{Deserialize, Serialize};

/// A purchasable product.
///
/// Prices are whole currency units; discounts truncate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "pricePerItem")]
    pub price_per_item: u32,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(id: u32, description: impl Into<String>, price_per_item: u32) -> Self {
        Self {
            id,
            description: description.into(),
            price_per_item,
        }
    }
}
