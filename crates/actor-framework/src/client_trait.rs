//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific clients, adding a default `snapshot`
//! method built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: u32, taken: bool }
/// #[derive(Debug)] struct Take;
/// #[derive(Debug)] enum SeatAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SeatError(String);
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u32;
///     type Update = Take;
///     type Action = SeatAction;
///     type Context = ();
///     type Error = SeatError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn seed(_: &()) -> Vec<Self> { (1..=3).map(|id| Seat { id, taken: false }).collect() }
///     async fn on_update(&mut self, _: Take, _: &()) -> Result<(), Self::Error> {
///         self.taken = true;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: &SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SeatClient {
///     inner: ResourceClient<Seat>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///
///     fn inner(&self) -> &ResourceClient<Seat> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         SeatError(e.to_string())
///     }
/// }
///
/// async fn usage(client: SeatClient) {
///     // snapshot() is provided automatically!
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Key-ordered copy of every record.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
