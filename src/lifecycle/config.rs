//! Runtime settings for [`RestaurantSystem`](super::RestaurantSystem).

use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "MENU_ORDERS_CHANNEL_CAPACITY";
pub const SEED_MENU_VAR: &str = "MENU_ORDERS_SEED_MENU";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// How the actors are built when the system starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Mailbox size of each actor. Senders wait once it is full.
    pub channel_capacity: usize,
    /// Start the catalog with the house menu instead of empty.
    pub seed_menu: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_menu: true,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(SEED_MENU_VAR) {
            config.seed_menu = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: SEED_MENU_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
