//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (menu items, orders, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated
//! types for IDs, payloads, context and errors, and provides the lifecycle hooks
//! (`on_create`, `on_patch`) the actor calls while processing requests.
//!
//! # Caller-Assigned Identity
//! Entities carry their own key. The actor never invents IDs: it reads [`ActorEntity::id`]
//! after building an entity from its payload and rejects the create when the key is taken.
//! On a replace the addressed key wins, see [`ActorEntity::rekey`].
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] has a default implementation that does nothing (`Ok(())`).
//! Override it when an entity must validate itself or derive fields from other actors.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity, assigned by the caller.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The full record a caller submits on create and replace.
    type Create: Send + Sync + Debug;

    /// A partial update: every field optional, absent fields are left unchanged.
    type Patch: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per resource rather than one per operation. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Overwrite the key, used when a replace addresses an existing slot.
    fn rekey(&mut self, id: Self::Id);

    /// Construct the entity from a submitted payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored, for both create and replace.
    /// Returning an error aborts the operation and leaves the store untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update.
    ///
    /// The actor calls this on a working copy and only commits it when the hook succeeds.
    async fn on_patch(&mut self, patch: Self::Patch, ctx: &Self::Context)
        -> Result<(), Self::Error>;
}
