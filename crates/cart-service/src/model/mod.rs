//! Pure data structures. [`CartItem`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod cart_item;
pub mod product;

pub use cart_item::*;
pub use product::*;
