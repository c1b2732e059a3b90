//! # Cart Actor
//!
//! The shopping cart as a single-owner store: one task holds every [`CartItem`] and applies
//! reads, quantity changes, resets and coupons strictly one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`CartItem`] and its [`CartContext`]
//! - [`catalog`] - the default products and the cart seeded from them
//! - [`coupon`] - [`CouponPolicy`]: accepted code shape and discount
//! - [`actions`] - [`CartAction`], the store-wide operations
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cart_service::cart_actor::{self, CartContext};
//! use cart_service::clients::CartClient;
//! use cart_service::model::ItemId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32);
//!     let client = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(CartContext::default()));
//!
//!     assert!(client.update_quantity(ItemId(0), 3).await?);
//!     assert!(client.apply_coupon("ABC-1234").await?);
//!     assert!(!client.apply_coupon("nope").await?);
//!
//!     let cart = client.read().await?;
//!     assert_eq!(cart[0].quantity, 3);
//!     assert_eq!(cart[0].product.price_per_item, 449);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod catalog;
pub mod coupon;
pub mod entity;
pub mod error;

pub use actions::*;
pub use coupon::*;
pub use entity::*;
pub use error::*;

use crate::model::CartItem;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartItem>, ResourceClient<CartItem>) {
    ResourceActor::new(buffer_size)
}
