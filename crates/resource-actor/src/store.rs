//! # Entity Store
//!
//! The in-memory collection owned by a `ResourceActor`. Entries keep insertion order,
//! which is the order `list` reports. Lookups are linear; collections are small.

use crate::entity::ActorEntity;

/// Insertion-ordered collection of entities keyed by [`ActorEntity::id`].
#[derive(Debug)]
pub struct EntityStore<T: ActorEntity> {
    entries: Vec<T>,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ActorEntity> EntityStore<T> {
    /// Builds a store from existing entities. Later duplicates of a key are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::default();
        for entry in entries {
            if !store.contains(entry.id()) {
                store.entries.push(entry);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    /// Appends an entity. The caller checks the key is free.
    pub fn push(&mut self, entity: T) {
        self.entries.push(entity);
    }

    /// Overwrites the entity stored under `id`, keeping its position.
    /// Returns the previous value, or gives `entity` back when the key is absent.
    pub fn replace(&mut self, id: &T::Id, entity: T) -> Result<T, T> {
        match self.position(id) {
            Some(index) => Ok(std::mem::replace(&mut self.entries[index], entity)),
            None => Err(entity),
        }
    }

    /// Removes and returns the entity under `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.position(id).map(|index| self.entries.remove(index))
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}
