//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every record kept by a `ResourceActor`
//! must implement. It specifies associated types for IDs, update DTOs, store-wide actions,
//! context and errors, and provides the hooks the owner loop calls (`seed`, `on_update`,
//! `is_retained`, `check_action`, `handle_action`).
//!
//! # Architecture Note
//! The owner loop is written *once* against this trait. A cart line, a lunch order or a
//! customer record only has to describe how it is seeded, how it reacts to an update and
//! how it reacts to a store-wide action; the channel plumbing, ordering and snapshotting
//! live in [`ResourceActor`](crate::ResourceActor).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::is_retained`]
//! - [`ActorEntity::check_action`]
//!
//! You do **not** need to implement these unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await (e.g., calling other actors).
/// The `Context` type is injected into every hook when the loop starts, which allows
/// "Late Binding" of dependencies and configuration (passing them to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Stable key of a record. `Ord` so snapshots come out sorted by key.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// A store-wide operation applied to every record (e.g., a discount).
    type Action: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients deal with a single
    /// error type and match on the variants they care about.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Key under which the record is stored.
    fn id(&self) -> &Self::Id;

    /// The default collection. Loaded when the loop starts and again on every reset.
    fn seed(ctx: &Self::Context) -> Vec<Self>;

    /// Called when an update request targets this record.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Whether the record stays in the store after an update.
    ///
    /// Returning `false` removes it; a record is never stored in a state this rejects.
    fn is_retained(&self) -> bool {
        true
    }

    /// Validates a store-wide action before any record is touched.
    ///
    /// A rejected action leaves the whole store untouched.
    fn check_action(_action: &Self::Action, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a validated store-wide action to this record.
    async fn handle_action(
        &mut self,
        action: &Self::Action,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
