//! Data access layer: a single repository interface with interchangeable
//! transport implementations. Callers depend only on the trait; which
//! variant is wired in is a startup-time configuration choice, and swapping
//! variants does not change observable behavior beyond latency and
//! error-message text.

pub mod memory;
pub mod postgres;
pub mod rest;

pub use memory::MemInventory;
pub use postgres::PgInventory;
pub use rest::RestInventory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        Building, CreateEquipment, Department, Equipment, EquipmentType, FundingSource,
        Manufacturer, Room, UpdateEquipment,
    },
};

/// Equipment CRUD plus read-only lookup listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Every equipment record with lookup fields resolved, newest first
    /// (descending identifier).
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>>;

    /// Persist a new record; the store assigns the identifier. Blank or
    /// malformed numeric text in the payload falls back to defaults.
    async fn add_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment>;

    /// Apply a partial update; only supplied fields change. `NotFound` when
    /// the identifier does not exist.
    async fn update_equipment(&self, id: i32, changes: &UpdateEquipment) -> AppResult<Equipment>;

    /// Remove a record. `NotFound` when the identifier does not exist.
    async fn delete_equipment(&self, id: i32) -> AppResult<()>;

    async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>>;
    async fn list_equipment_types(&self) -> AppResult<Vec<EquipmentType>>;
    async fn list_buildings(&self) -> AppResult<Vec<Building>>;
    async fn list_departments(&self) -> AppResult<Vec<Department>>;
    async fn list_rooms(&self) -> AppResult<Vec<Room>>;
    async fn list_funding_sources(&self) -> AppResult<Vec<FundingSource>>;
}
