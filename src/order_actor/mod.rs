//! # Order Actor
//!
//! The order book: one [`ResourceActor`] owning every [`Order`], priced against the menu.
//!
//! ## Overview
//!
//! The order actor is the one resource with a dependency. It is created without it and
//! receives a [`MenuClient`] when started:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(menu_client.clone()));
//! ```
//!
//! ## Pricing Rules
//!
//! | Operation | Unknown menu item |
//! |-----------|-------------------|
//! | create | fails with [`OrderError::MenuItemNotFound`], nothing stored |
//! | replace | fails with [`OrderError::MenuItemNotFound`], stored order untouched |
//! | patch with `items` | line kept, contributes zero to `total_bill` |
//!
//! A total too large for a decimal amount fails every one of these with
//! [`OrderError::TotalOverflow`] and leaves the stored order as it was.
//!
//! Order ids are unique: creating an order under a taken id fails with
//! [`OrderError::DuplicateKey`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new, empty Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
