//! ActorEntity implementation for the CartItem domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that lets [`CartItem`] be
//! owned by the generic [`ResourceActor`](actor_framework::ResourceActor), plus the
//! [`CartContext`] injected into its hooks.

use actor_framework::ActorEntity;
use async_trait::async_trait;

use super::catalog::{default_catalog, seed_cart};
use super::{CartAction, CartError, CouponPolicy};
use crate::model::{CartItem, ItemId, Product, QuantityUpdate};

/// Configuration the cart owner reads while serving requests.
#[derive(Debug, Clone)]
pub struct CartContext {
    /// Products a fresh (or reset) cart is seeded with.
    pub catalog: Vec<Product>,
    pub coupons: CouponPolicy,
}

impl Default for CartContext {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            coupons: CouponPolicy::default(),
        }
    }
}

#[async_trait]
impl ActorEntity for CartItem {
    type Id = ItemId;
    type Update = QuantityUpdate;
    type Action = CartAction;
    type Context = CartContext;
    type Error = CartError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    /// One unit of each catalog product.
    fn seed(ctx: &CartContext) -> Vec<Self> {
        seed_cart(&ctx.catalog)
    }

    async fn on_update(&mut self, update: QuantityUpdate, _ctx: &CartContext) -> Result<(), CartError> {
        self.quantity = update.quantity;
        Ok(())
    }

    /// A line with quantity 0 is removed rather than stored.
    fn is_retained(&self) -> bool {
        self.quantity > 0
    }

    fn check_action(action: &CartAction, ctx: &CartContext) -> Result<(), CartError> {
        match action {
            CartAction::ApplyCoupon(code) => ctx.coupons.validate(code),
        }
    }

    async fn handle_action(&mut self, action: &CartAction, ctx: &CartContext) -> Result<(), CartError> {
        match action {
            CartAction::ApplyCoupon(_) => {
                self.product.price_per_item = ctx.coupons.apply(self.product.price_per_item);
                Ok(())
            }
        }
    }
}
