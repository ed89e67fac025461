//! Process-level wiring: configuration, actor startup and shutdown, log setup.

pub mod config;
pub mod restaurant_system;
pub mod tracing;

pub use config::{ConfigError, SystemConfig};
pub use restaurant_system::{RestaurantSystem, ShutdownError};
pub use self::tracing::setup_tracing;
