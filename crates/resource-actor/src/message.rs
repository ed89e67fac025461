//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly onto the operations a resource collection supports:
///
/// - **List**: every entity, in insertion order.
/// - **Create**: builds an entity from [`ActorEntity::Create`] and appends it; the key must be free.
/// - **Get**: fetches the current state of one entity.
/// - **Replace**: rebuilds the entity at an existing key from a full [`ActorEntity::Create`] payload.
/// - **Patch**: applies an [`ActorEntity::Patch`] to an existing entity.
/// - **Delete**: removes the entity.
///
/// The enum is generic over `T: ActorEntity`, so a menu payload can never be sent to the
/// order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Replace {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
