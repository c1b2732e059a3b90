//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the owner of an entity store. It implements the
//! "Server" side of the Actor Model, processing messages sequentially and ensuring exclusive
//! access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// ## ResourceActor
///
/// The `ResourceActor<T>` struct is the *server* side of the framework. It owns the in-memory
/// store for a given entity type `T: ActorEntity` and processes all incoming
/// `ResourceRequest<T>` messages one at a time. Nothing else holds a reference to the store,
/// so no `Mutex` or `RwLock` is involved: every read sees all mutations that were dequeued
/// before it, and no two mutations ever interleave.
///
/// * **Ordering** – a single channel carries every request kind, so the processing order is
///   the arrival order across all of them.
/// * **Snapshots** – `List` and `Reset` reply with clones; callers never alias the live store.
/// * **Context injection** – a user-provided `Context` is passed to every hook.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)` or `actor.run_until(context, signal)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct Set(u32);
/// #[derive(Debug)] struct Double;
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Update = Set;
///     type Action = Double;
///     type Context = ();
///     type Error = CounterError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn seed(_: &()) -> Vec<Self> { vec![Counter { id: 1, value: 1 }] }
///     async fn on_update(&mut self, set: Set, _: &()) -> Result<(), Self::Error> {
///         self.value = set.0;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: &Double, _: &()) -> Result<(), Self::Error> {
///         self.value *= 2;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.update(1, Set(5)).await.unwrap();
///     client.perform_action(Double).await.unwrap();
///     let all = client.list().await.unwrap();
///     assert_eq!(all[0].value, 10);
/// }
/// ```
///
/// # Implementation Details
///
/// * **List**: clones every record in key order.
/// * **Get**: clones a single record, or `None`.
/// * **Update**: calls `on_update` on a copy of the record. A failed update leaves the stored
///   record as it was; otherwise the copy replaces it, or the record is dropped if
///   `is_retained()` is now false. Unknown ids reply `NotFound`.
/// * **Reset**: rebuilds the store from `T::seed`.
/// * **Action**: calls `check_action` once, then `handle_action` on a working copy of every
///   record. The copy replaces the store only if every record accepted the action.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait until there is space.
    ///
    /// The store stays empty until the loop starts, because seeding needs the context.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(self, context: T::Context) {
        self.run_until(context, std::future::pending::<()>()).await
    }

    /// Runs the actor's event loop until `terminate` resolves or every client has been dropped.
    ///
    /// The terminate signal is checked first on each turn. Requests still queued when it
    /// fires are dropped along with the receiver: their callers get
    /// [`FrameworkError::ActorDropped`], later callers get [`FrameworkError::ActorClosed`].
    pub async fn run_until<F>(mut self, context: T::Context, terminate: F)
    where
        F: Future<Output = ()> + Send,
    {
        // Extract just the type name (e.g., "CartItem" instead of "cart_service::model::cart_item::CartItem")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        self.store = Self::seeded(&context);
        info!(entity_type, size = self.store.len(), "Actor started");

        tokio::pin!(terminate);
        loop {
            let msg = tokio::select! {
                biased;
                _ = &mut terminate => {
                    info!(entity_type, "Terminate signal received");
                    break;
                }
                msg = self.receiver.recv() => match msg {
                    Some(msg) => msg,
                    None => break,
                },
            };
            self.handle(entity_type, &context, msg).await;
        }

        self.receiver.close();
        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn seeded(context: &T::Context) -> BTreeMap<T::Id, T> {
        T::seed(context)
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect()
    }

    fn snapshot(&self) -> Vec<T> {
        self.store.values().cloned().collect()
    }

    async fn handle(&mut self, entity_type: &str, context: &T::Context, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::List { respond_to } => {
                debug!(entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.snapshot()));
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                let found = item.is_some();
                debug!(entity_type, %id, found, "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let Some(current) = self.store.get(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    return;
                };
                let mut next = current.clone();
                if let Err(e) = next.on_update(update, context).await {
                    warn!(entity_type, %id, error = %e, "Update failed");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                if next.is_retained() {
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(Some(next.clone())));
                    self.store.insert(id, next);
                } else {
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Removed");
                    let _ = respond_to.send(Ok(None));
                }
            }
            ResourceRequest::Reset { respond_to } => {
                self.store = Self::seeded(context);
                info!(entity_type, size = self.store.len(), "Reset");
                let _ = respond_to.send(Ok(self.snapshot()));
            }
            ResourceRequest::Action { action, respond_to } => {
                debug!(entity_type, ?action, "Action");
                if let Err(e) = T::check_action(&action, context) {
                    warn!(entity_type, error = %e, "Action rejected");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                let mut working = self.store.clone();
                for (id, item) in working.iter_mut() {
                    if let Err(e) = item.handle_action(&action, context).await {
                        warn!(entity_type, %id, error = %e, "Action failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        return;
                    }
                }
                self.store = working;
                info!(entity_type, touched = self.store.len(), "Action ok");
                let _ = respond_to.send(Ok(self.store.len()));
            }
        }
    }
}
