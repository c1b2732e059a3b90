//! Store-wide actions for the cart actor.
//!
//! These are handled by [`ActorEntity::check_action`](actor_framework::ActorEntity::check_action)
//! and [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) on
//! [`CartItem`](crate::model::CartItem): validated once, then applied to every line.

/// Operations that transform the whole cart at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Discounts every line's unit price if the code is well-formed.
    ///
    /// Applying a valid coupon again discounts again; there is no per-code guard.
    ApplyCoupon(String),
}
