//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its own messages
/// *sequentially* in a loop, so the store needs no `Mutex` or `RwLock`: every
/// read-modify-write on the collection runs to completion before the next request
/// is looked at.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `seeded()`) to get the `actor` and `client`.
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u32 }
/// #[derive(Debug)] struct TableError;
/// impl std::fmt::Display for TableError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "table") }
/// }
/// impl std::error::Error for TableError {}
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = Table;
///     type Patch = u32;
///     type Context = ();
///     type Error = TableError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn rekey(&mut self, id: u32) { self.id = id; }
///     fn from_create_params(params: Table) -> Result<Self, TableError> { Ok(params) }
///     async fn on_patch(&mut self, seats: u32, _: &()) -> Result<(), TableError> {
///         self.seats = seats;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Table>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let table = client.create(Table { id: 4, seats: 2 }).await.unwrap();
///     assert_eq!(table.id, 4);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity, rejects a taken key with `AlreadyExists`, runs
///   `on_create`, appends.
/// * **Replace**: requires the key to exist, builds a candidate from the payload,
///   forces the addressed key onto it, runs `on_create`, overwrites in place.
/// * **Patch**: runs `on_patch` on a copy, commits the copy only on success.
/// * **Delete**: removes the entity and returns it.
///
/// A failed request never changes the store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty store and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::seeded(buffer_size, Vec::new())
    }

    /// Creates an actor whose store starts with `entries`, in the given order.
    pub fn seeded(buffer_size: usize, entries: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::from_entries(entries),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "MenuItem" instead of "menu_orders::model::menu_item::MenuItem"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.all().to_vec()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let result = self.replace(id.clone(), params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Replaced"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    let result = self.patch(&id, patch, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Patched"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Patch failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.store.remove(&id) {
                        Some(item) => {
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ =
                                respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(entity_error)?;
        if self.store.contains(item.id()) {
            return Err(FrameworkError::AlreadyExists(item.id().to_string()));
        }
        item.on_create(context).await.map_err(entity_error)?;
        self.store.push(item.clone());
        Ok(item)
    }

    async fn replace(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        if !self.store.contains(&id) {
            return Err(FrameworkError::NotFound(id.to_string()));
        }
        let mut item = T::from_create_params(params).map_err(entity_error)?;
        item.rekey(id.clone());
        item.on_create(context).await.map_err(entity_error)?;
        self.store
            .replace(&id, item.clone())
            .map_err(|_| FrameworkError::NotFound(id.to_string()))?;
        Ok(item)
    }

    async fn patch(
        &mut self,
        id: &T::Id,
        patch: T::Patch,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut working = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        working.on_patch(patch, context).await.map_err(entity_error)?;
        self.store
            .replace(id, working.clone())
            .map_err(|_| FrameworkError::NotFound(id.to_string()))?;
        Ok(working)
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
