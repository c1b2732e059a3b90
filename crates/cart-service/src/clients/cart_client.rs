//! # Cart Client
//!
//! The facade request handlers talk to. Each call builds one request, sends it to the cart
//! owner and waits for the reply; no cart logic lives here beyond translating replies.
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::cart_actor::{CartAction, CartError};
use crate::model::{CartItem, ItemId, QuantityChange, QuantityUpdate};

/// Client for interacting with the cart actor.
///
/// Unknown ids and malformed coupons are answered with `Ok(false)`. `Err` means the owner
/// could not be reached (terminated, dropped the request, or timed out).
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>) -> Self {
        Self { inner }
    }

    /// True once the cart owner has stopped; every call then fails.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

#[async_trait]
impl ActorClient<CartItem> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}

impl CartClient {
    /// Key-ordered copy of the cart.
    pub async fn read(&self) -> Result<Vec<CartItem>, CartError> {
        self.snapshot().await
    }

    /// Sets the quantity of line `id`; zero removes the line.
    ///
    /// Returns `false` if there is no such line.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ItemId, quantity: u16) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.inner.update(id, QuantityUpdate { quantity }).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Replaces the cart with the default one and returns it.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.inner.reset().await.map_err(Self::map_error)
    }

    /// Discounts every line if `code` is well-formed.
    ///
    /// Returns `false`, leaving prices untouched, for a malformed code.
    #[instrument(skip(self))]
    pub async fn apply_coupon(&self, code: &str) -> Result<bool, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(CartAction::ApplyCoupon(code.to_string()))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => match e.entity_error::<CartError>() {
                Some(CartError::InvalidCoupon(_)) => Ok(false),
                _ => Err(Self::map_error(e)),
            },
        }
    }

    /// Applies `changes` in order and returns the resulting cart.
    ///
    /// Stops at the first unknown id with [`CartError::ItemNotFound`]; changes before it
    /// remain applied.
    #[instrument(skip(self, changes), fields(count = changes.len()))]
    pub async fn update_quantities(&self, changes: &[QuantityChange]) -> Result<Vec<CartItem>, CartError> {
        for change in changes {
            if !self.update_quantity(change.id, change.quantity).await? {
                warn!(id = %change.id, "Batch stopped at unknown item");
                return Err(CartError::ItemNotFound(change.id));
            }
        }
        self.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use actor_framework::mock::{create_mock_client, expect_action, expect_update, MockClient};

    fn item(id: u32, quantity: u16) -> CartItem {
        CartItem::new(id, Product::new(id + 1, "Widget", 10), quantity)
    }

    #[tokio::test]
    async fn test_update_quantity_sends_id_and_quantity() {
        let (client, mut receiver) = create_mock_client::<CartItem>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.update_quantity(ItemId(2), 8).await });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ItemId(2));
        assert_eq!(update, QuantityUpdate { quantity: 8 });
        responder.send(Ok(Some(item(2, 8)))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_update_quantity_unknown_id_is_false() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update(ItemId(99))
            .return_err(FrameworkError::NotFound("99".into()));

        let cart_client = CartClient::new(mock.client());
        assert_eq!(cart_client.update_quantity(ItemId(99), 1).await, Ok(false));
        mock.verify();
    }

    #[tokio::test]
    async fn test_removal_counts_as_success() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update(ItemId(1)).return_ok(None);

        let cart_client = CartClient::new(mock.client());
        assert_eq!(cart_client.update_quantity(ItemId(1), 0).await, Ok(true));
        mock.verify();
    }

    #[tokio::test]
    async fn test_apply_coupon_forwards_code() {
        let (client, mut receiver) = create_mock_client::<CartItem>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.apply_coupon("ABC-1234").await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, CartAction::ApplyCoupon("ABC-1234".into()));
        responder.send(Ok(5)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_invalid_coupon_is_false() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_action().return_err(FrameworkError::EntityError(Box::new(
            CartError::InvalidCoupon("AB-1234".into()),
        )));

        let cart_client = CartClient::new(mock.client());
        assert_eq!(cart_client.apply_coupon("AB-1234").await, Ok(false));
        mock.verify();
    }

    #[tokio::test]
    async fn test_communication_failures_are_errors() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update(ItemId(0)).return_err(FrameworkError::ActorDropped);
        mock.expect_action().return_err(FrameworkError::ActorClosed);
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let cart_client = CartClient::new(mock.client());
        assert!(matches!(
            cart_client.update_quantity(ItemId(0), 1).await,
            Err(CartError::ActorCommunicationError(_))
        ));
        assert!(matches!(
            cart_client.apply_coupon("ABC-1234").await,
            Err(CartError::ActorCommunicationError(_))
        ));
        assert!(matches!(
            cart_client.read().await,
            Err(CartError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_batch_stops_at_first_unknown_id() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update(ItemId(0)).return_ok(Some(item(0, 4)));
        mock.expect_update(ItemId(42))
            .return_err(FrameworkError::NotFound("42".into()));

        let cart_client = CartClient::new(mock.client());
        let changes = [
            QuantityChange { id: ItemId(0), quantity: 4 },
            QuantityChange { id: ItemId(42), quantity: 1 },
            QuantityChange { id: ItemId(1), quantity: 2 },
        ];
        let result = cart_client.update_quantities(&changes).await;

        assert_eq!(result, Err(CartError::ItemNotFound(ItemId(42))));
        // The third change and the final read were never sent.
        mock.verify();
    }

    #[tokio::test]
    async fn test_batch_returns_fresh_snapshot() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update(ItemId(0)).return_ok(Some(item(0, 2)));
        mock.expect_update(ItemId(1)).return_ok(None);
        mock.expect_list().return_ok(vec![item(0, 2)]);

        let cart_client = CartClient::new(mock.client());
        let changes = [
            QuantityChange { id: ItemId(0), quantity: 2 },
            QuantityChange { id: ItemId(1), quantity: 0 },
        ];
        let cart = cart_client.update_quantities(&changes).await.unwrap();

        assert_eq!(cart, vec![item(0, 2)]);
        mock.verify();
    }
}
