//! Error types for the cart actor.

use thiserror::Error;

use crate::model::ItemId;

/// Errors that can occur during cart operations.
///
/// `ItemNotFound` and `InvalidCoupon` are ordinary business outcomes; the
/// [`CartClient`](crate::clients::CartClient) reports them as `false` where a boolean is
/// expected and only surfaces them as errors from batch calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line with this id is in the cart.
    #[error("Shopping cart item with ID {0} not found")]
    ItemNotFound(ItemId),

    /// The coupon code does not have the accepted shape.
    #[error("Coupon {0} is not valid")]
    InvalidCoupon(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
