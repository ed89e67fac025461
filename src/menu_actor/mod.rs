//! # Menu Actor
//!
//! The menu catalog: one [`ResourceActor`] owning every [`MenuItem`], in the order they
//! were added.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`seed`] - the house menu a fresh system starts with
//! - [`new()`] / [`seeded()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use menu_orders::menu_actor;
//! use menu_orders::model::MenuItem;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(32);
//!
//!     // The catalog has no dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let item = client.add_item(MenuItem::new(1, "Adobo", Decimal::new(350, 0))).await?;
//!     assert_eq!(client.get_item(item.id).await?.name, "Adobo");
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: Context = ()
//! - **Caller-assigned ids**: adding a taken id fails with [`MenuError::DuplicateKey`]
//! - **Price validation**: negative prices are refused on add, replace and patch

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::house_menu;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use resource_actor::ResourceActor;

/// Creates an empty menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    seeded(buffer_size, Vec::new())
}

/// Creates a menu actor that starts with `items`, and its client.
pub fn seeded(buffer_size: usize, items: Vec<MenuItem>) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::seeded(buffer_size, items);
    (actor, MenuClient::new(generic_client))
}
