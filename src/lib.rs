//! # Menu Orders
//!
//! > **A restaurant's menu catalog and order book, each owned by its own actor.**
//!
//! Two in-memory collections sit behind [`resource_actor`]:
//!
//! - the **menu catalog**: dishes with a unit price, keyed by a caller-assigned [`MenuItemId`](model::MenuItemId)
//! - the **order book**: customer orders of `(menu item, quantity)` lines with a cached `total_bill`
//!
//! An order's total is always derived from the catalog as it stands when the order is written.
//! Prices use [`rust_decimal::Decimal`], so `175.25 × 3` is `525.75` exactly.
//!
//! ## Module Tour
//!
//! ### 1. The Domain ([`model`], [`pricing`])
//! Plain data types and the pure pricing function. Nothing here knows about actors.
//!
//! ### 2. The Actors ([`menu_actor`], [`order_actor`])
//! [`ActorEntity`](resource_actor::ActorEntity) implementations with their validation and
//! pricing hooks, and factory functions returning `(actor, client)` pairs.
//! - **Key items**: [`MenuError`](menu_actor::MenuError), [`OrderError`](order_actor::OrderError).
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! Domain clients wrap the generic `ResourceClient`; [`RestaurantApi`](api::RestaurantApi)
//! maps every verb and path onto them and every error onto a status code.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Configuration, startup wiring and graceful shutdown.
//! - **Key items**: [`RestaurantSystem`](lifecycle::RestaurantSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Start with an empty menu and small mailboxes
//! MENU_ORDERS_SEED_MENU=false MENU_ORDERS_CHANNEL_CAPACITY=4 cargo run
//!
//! # Run all tests, runtime crate included
//! cargo test --workspace
//! ```

pub mod api;
pub mod clients;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod pricing;
