//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{load_demo_data, InventoryService};
use crate::config::Settings;
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Flight inventory backing the shell session
    pub inventory: InventoryService,
}

impl ServiceContainer {
    /// Create a container with an empty inventory.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            inventory: InventoryService::new(),
        }
    }

    /// Create a container and preload the demo data when `load_demo` is set.
    pub fn bootstrap(settings: Settings) -> InfraResult<Self> {
        let mut container = Self::new(settings);
        if container.settings.load_demo {
            debug!("preloading demo data");
            load_demo_data(&mut container.inventory)?;
        }
        Ok(container)
    }
}
