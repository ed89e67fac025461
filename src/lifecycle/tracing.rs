//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole process.
//!
//! The format is compact and hides the module path (`with_target(false)`); the actors
//! tag every line with an `entity_type` field instead. Levels come from `RUST_LOG`
//! and fall back to `info`.
//!
//! ```bash
//! # Lifecycle and writes only (default)
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the runtime crate
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! Creating an order logs, in order: `create_order called` from [`OrderClient`], the order
//! actor's `Create`, the menu actor's `List` while the order is priced, `Priced order`,
//! the order actor's `Created`, then `Order placed` back in the client. Failed writes log
//! `Create failed`, `Replace failed` or `Patch failed` at `warn` with the error.
//!
//! [`OrderClient`]: crate::clients::OrderClient

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
