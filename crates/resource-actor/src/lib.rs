//! # Resource Actor
//!
//! Building blocks for owning in-memory collections inside Tokio actors. Each collection
//! lives in one [`ResourceActor`] task that handles requests one at a time, and callers
//! talk to it through a cheap, cloneable [`ResourceClient`].
//!
//! ## Why an actor per collection?
//!
//! Every operation on a collection is a read-modify-write: look an entry up, check a key,
//! derive a value, write it back. Running those steps inside a single task that drains a
//! channel serializes them without any lock, so two concurrent callers can never interleave
//! halfway through an update.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain record, its payloads and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Operations
//!
//! Keys are assigned by callers, not by the actor:
//!
//! | Request | Fails with |
//! |---------|-----------|
//! | `list` | never |
//! | `create` | `AlreadyExists` when the key is taken, `EntityError` from hooks |
//! | `get` | never (`None` when absent) |
//! | `replace` | `NotFound`, `EntityError` |
//! | `patch` | `NotFound`, `EntityError` |
//! | `delete` | `NotFound` |
//!
//! A failed request leaves the store exactly as it was.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! An entity whose hooks need another collection receives that collection's client as its
//! `Context`, so actors can be created in any order and wired afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient), a client answered from a
//! queue of expectations, for testing an actor whose hooks depend on another actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
