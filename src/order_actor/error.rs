//! Error types for the Order actor.

use crate::model::MenuItemId;
use crate::pricing::TotalOverflow;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with this id already exists.
    #[error("Order already exists: {0}")]
    DuplicateKey(String),

    /// A cart line points at a dish the catalog does not have.
    #[error("Menu item with ID {0} not found")]
    MenuItemNotFound(MenuItemId),

    /// Cart lines must order at least one of something.
    #[error("Invalid quantity {quantity} for menu item {menu_item_id}")]
    InvalidQuantity {
        menu_item_id: MenuItemId,
        quantity: u32,
    },

    /// The order total does not fit in a decimal amount.
    #[error("Order total overflowed at menu item {0}")]
    TotalOverflow(MenuItemId),

    /// The menu catalog could not be read while pricing.
    #[error("Menu unavailable: {0}")]
    MenuUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<TotalOverflow> for OrderError {
    fn from(e: TotalOverflow) -> Self {
        OrderError::TotalOverflow(e.0)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => OrderError::DuplicateKey(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
