//! Business logic services

pub mod inventory;
pub mod translate;

use std::sync::Arc;

use crate::{config::TranslateConfig, repository::InventoryRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub translate: translate::TranslateService,
}

impl Services {
    /// Create all services over the wired-in repository backend
    pub fn new(store: Arc<dyn InventoryRepository>, translate_config: &TranslateConfig) -> Self {
        Self {
            inventory: inventory::InventoryService::new(store),
            translate: translate::TranslateService::new(translate_config),
        }
    }
}
