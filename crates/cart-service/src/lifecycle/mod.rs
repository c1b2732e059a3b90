//! # System Lifecycle
//!
//! Starting and stopping a cart owner. [`CartSystem::start`] spawns the owner task with its
//! [`CartContext`](crate::cart_actor::CartContext) injected at run time and hands back a
//! [`CartClient`](crate::clients::CartClient); [`CartSystem::shutdown`] sends the terminate
//! signal and waits for the task to finish.
//!
//! Shutdown does not depend on every client clone being dropped. Request handlers may still
//! hold clones when the server stops; once the owner has exited, those clones fail fast with
//! [`CartError::ActorCommunicationError`](crate::cart_actor::CartError::ActorCommunicationError).
//!
//! Tracing is initialized by the binary through [`actor_framework::tracing::setup_tracing`].

pub mod cart_system;

pub use cart_system::*;
