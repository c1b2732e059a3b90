//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of by an owner loop. It lets you unit-test the logic that
//! sits *around* a client (a domain facade, an HTTP handler) without any store behind it.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | Logic around the client | The owner loop itself |
//!
//! Two styles are available:
//!
//! 1. **Fluent expectations** with [`MockClient`]: queue replies, run the code under test,
//!    then call [`MockClient::verify`].
//! 2. **Manual receiver** with [`create_mock_client`]: pop each request with
//!    [`expect_update`], [`expect_action`] or [`expect_list`] and answer it yourself, which
//!    also lets the test assert on the request payload.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Seat { id: u32 }
//! #[derive(Debug)] struct Take;
//! #[derive(Debug)] enum SeatAction {}
//! #[derive(Debug, thiserror::Error)] #[error("seat error")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Update = Take; type Action = SeatAction;
//!     type Context = (); type Error = SeatError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn seed(_: &()) -> Vec<Self> { Vec::new() }
//!     async fn on_update(&mut self, _: Take, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: &SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_list().return_ok(vec![Seat { id: 7 }]);
//!
//!     let seats = mock.client().list().await.unwrap();
//!     assert_eq!(seats, vec![Seat { id: 7 }]);
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, matched against the next request by variant.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Reset {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        response: Result<usize, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that does not match the variant (or,
/// for updates, the id) of the next expectation panics the background task, after which
/// the client observes [`FrameworkError::ActorDropped`] and `verify` reports the leftover.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation lock poisoned")
                    .pop_front();
                let kind = request.kind();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Update sent to an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Reset { respond_to },
                        Some(Expectation::Reset { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (_, None) => panic!("Unexpected {kind} request: no expectations left"),
                    _ => panic!("Unexpected {kind} request: expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    /// Expects an `update` operation on `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `reset` operation.
    pub fn expect_reset(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Reset { response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Action { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("expectation lock poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// MANUAL RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test drives the receiver itself, inspecting each request and answering through its
/// reply slot, which makes it possible to simulate success, failure or delay deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Action, Response<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Slot {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct Relabel(String);

    #[derive(Debug)]
    enum SlotAction {
        Clear,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Slot error")]
    struct SlotError;

    #[async_trait]
    impl ActorEntity for Slot {
        type Id = u32;
        type Update = Relabel;
        type Action = SlotAction;
        type Context = ();
        type Error = SlotError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn seed(_ctx: &()) -> Vec<Self> {
            Vec::new()
        }

        async fn on_update(&mut self, update: Relabel, _ctx: &()) -> Result<(), Self::Error> {
            self.label = update.0;
            Ok(())
        }

        async fn handle_action(&mut self, _action: &SlotAction, _ctx: &()) -> Result<(), Self::Error> {
            self.label.clear();
            Ok(())
        }
    }

    fn slot(id: u32, label: &str) -> Slot {
        Slot {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_manual_receiver_update() {
        let (client, mut receiver) = create_mock_client::<Slot>(10);

        let task = tokio::spawn(async move { client.update(3, Relabel("b".into())).await });

        let (id, update, respond_to) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 3);
        assert_eq!(update.0, "b");
        respond_to.send(Ok(Some(slot(3, "b")))).unwrap();

        let updated = task.await.unwrap().unwrap();
        assert_eq!(updated, Some(slot(3, "b")));
    }

    #[tokio::test]
    async fn test_manual_receiver_action_error() {
        let (client, mut receiver) = create_mock_client::<Slot>(10);

        let task = tokio::spawn(async move { client.perform_action(SlotAction::Clear).await });

        let (action, respond_to) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, SlotAction::Clear));
        respond_to
            .send(Err(FrameworkError::EntityError(Box::new(SlotError))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(err.entity_error::<SlotError>().is_some());
    }

    #[tokio::test]
    async fn test_fluent_expectations_in_order() {
        let mut mock = MockClient::<Slot>::new();
        mock.expect_list().return_ok(vec![slot(1, "a")]);
        mock.expect_update(1).return_ok(None);
        mock.expect_reset().return_ok(vec![slot(1, "a"), slot(2, "b")]);

        let client = mock.client();
        assert_eq!(client.list().await.unwrap(), vec![slot(1, "a")]);
        assert_eq!(client.update(1, Relabel(String::new())).await.unwrap(), None);
        assert_eq!(client.reset().await.unwrap().len(), 2);

        mock.verify();
    }

    #[tokio::test]
    async fn test_fluent_error_injection() {
        let mut mock = MockClient::<Slot>::new();
        mock.expect_get().return_err(FrameworkError::ActorClosed);

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Slot>::new();
        mock.expect_action().return_ok(0);
        mock.verify();
    }
}
