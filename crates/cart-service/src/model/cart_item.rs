use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::Product;

/// Stable key of a cart line. Serialized as a bare number.
///
/// Signed, so a request naming a negative id is reported as an unknown item rather than
/// rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the shopping cart.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for CartItem`](#impl-ActorEntity-for-CartItem) for details on:
/// - Update parameters ([`QuantityUpdate`])
/// - Store-wide actions ([`CartAction`](crate::cart_actor::CartAction))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    #[serde(rename = "prod")]
    pub product: Product,
    pub quantity: u16,
}

impl CartItem {
    pub fn new(id: impl Into<ItemId>, product: Product, quantity: u16) -> Self {
        Self {
            id: id.into(),
            product,
            quantity,
        }
    }
}

/// DTO for quantity changes. Zero removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub quantity: u16,
}

/// One entry of a batch quantity change, as posted to `/cart/quantities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub id: ItemId,
    pub quantity: u16,
}
