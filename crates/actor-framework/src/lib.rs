//! # Actor Framework
//!
//! This crate provides the building blocks for **single-owner stores**: a mutable collection
//! that exactly one Tokio task may touch, reached by everyone else through typed request
//! messages with one-shot reply slots. It is the message-passing alternative to wrapping a
//! map in a `Mutex`.
//!
//! ## Why an owner task instead of a lock?
//!
//! - Isolated state (no shared memory, no locks)
//! - One queue for every request kind, so all operations get a single total order
//! - Readers receive deep copies, never references into the live store
//! - Shutdown is an explicit signal, and a request sent afterwards fails fast instead of hanging
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your records and how they react to updates and store-wide actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - The owner loop: ordering, snapshots, reset, termination
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe request/reply calls
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use tokio::sync::oneshot;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, seats: u16 }
//!
//! #[derive(Debug)] struct SetSeats(u16);
//! #[derive(Debug)] enum TicketAction { AddSeat }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Update = SetSeats;
//!     type Action = TicketAction;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!     fn seed(_: &()) -> Vec<Self> {
//!         vec![Ticket { id: 1, seats: 1 }, Ticket { id: 2, seats: 1 }]
//!     }
//!     async fn on_update(&mut self, update: SetSeats, _: &()) -> Result<(), Self::Error> {
//!         self.seats = update.0;
//!         Ok(())
//!     }
//!     // Tickets without seats leave the store.
//!     fn is_retained(&self) -> bool { self.seats > 0 }
//!     async fn handle_action(&mut self, _: &TicketAction, _: &()) -> Result<(), Self::Error> {
//!         self.seats += 1;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     let (stop, terminate) = oneshot::channel::<()>();
//!     let owner = tokio::spawn(actor.run_until((), async { let _ = terminate.await; }));
//!
//!     assert!(client.update(2, SetSeats(0)).await.unwrap().is_none());
//!     client.perform_action(TicketAction::AddSeat).await.unwrap();
//!     let tickets = client.list().await.unwrap();
//!     assert_eq!(tickets.len(), 1);
//!     assert_eq!(tickets[0].seats, 2);
//!
//!     stop.send(()).unwrap();
//!     owner.await.unwrap();
//!     assert!(client.list().await.is_err());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies and configuration are injected at **runtime** via `run(context)`, not at
//! construction time. The context is also what [`ActorEntity::seed`] reads, so the default
//! collection can come from configuration.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers a real `ResourceClient<T>` from
//! scripted expectations, for testing client wrappers without an owner behind them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
