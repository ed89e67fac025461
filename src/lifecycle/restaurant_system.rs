use super::config::SystemConfig;
use crate::api::RestaurantApi;
use crate::clients::{MenuClient, OrderClient};
use crate::{menu_actor, order_actor};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// Starts, wires and stops the menu and order actors.
///
/// The menu actor has no dependencies. The order actor is handed a clone of the
/// [`MenuClient`] as its context so it can price orders against the catalog.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
///
/// let menu = system.menu_client.list().await?;
/// let order = system.order_client.create_order(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Menu actor
    pub menu_client: MenuClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles, order actor first (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with [`SystemConfig::default`]: seeded menu, mailboxes of 32.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Creates both actors and spawns them. Must be called inside a Tokio runtime.
    pub fn with_config(config: SystemConfig) -> Self {
        let seed = if config.seed_menu {
            menu_actor::house_menu()
        } else {
            Vec::new()
        };

        // 1. Create actors (no dependencies)
        let (menu_actor, menu_client) = menu_actor::seeded(config.channel_capacity, seed);
        let (order_actor, order_client) = order_actor::new(config.channel_capacity);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        info!(
            channel_capacity = config.channel_capacity,
            seed_menu = config.seed_menu,
            "System started"
        );

        Self {
            menu_client,
            order_client,
            handles: vec![order_handle, menu_handle],
        }
    }

    /// A boundary facade sharing this system's actors.
    ///
    /// The facade holds client clones; drop it before calling [`shutdown`](Self::shutdown)
    /// or the actors will keep waiting for requests.
    pub fn api(&self) -> RestaurantApi {
        RestaurantApi::new(self.menu_client.clone(), self.order_client.clone())
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels. The order actor goes first: it owns a
    /// menu client, so the menu actor only sees its channel close once the order actor
    /// has exited.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
