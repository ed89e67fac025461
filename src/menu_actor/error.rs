//! Error types for the menu catalog.

use crate::model::MenuItemId;
use resource_actor::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// No menu item has the requested id.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A menu item with this id already exists.
    #[error("Menu item already exists: {0}")]
    DuplicateKey(String),

    /// Prices are amounts of money and cannot go below zero.
    #[error("Negative price for menu item {id}: {price}")]
    NegativePrice { id: MenuItemId, price: Decimal },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => MenuError::DuplicateKey(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
