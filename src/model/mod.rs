//! Pure data structures (DTOs) implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.
//!
//! Money is [`Decimal`](rust_decimal::Decimal) throughout; there is a single fixed currency.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
