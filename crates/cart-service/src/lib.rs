//! # Cart Service
//!
//! A shopping cart owned by a single Tokio task and served over HTTP.
//!
//! - **[model]**: Plain data ([`CartItem`](model::CartItem), [`Product`](model::Product)) with their JSON shape.
//! - **[cart_actor]**: The cart as an [`ActorEntity`](actor_framework::ActorEntity): seeding, quantity changes, coupons.
//! - **[clients]**: [`CartClient`](clients::CartClient), the facade every caller goes through.
//! - **[lifecycle]**: [`CartSystem`](lifecycle::CartSystem) starts and stops a cart owner.
//! - **[config]**: Command-line and environment settings.
//! - **[web]**: The HTTP routes and the server loop.
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning the owner.

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod web;
