//! Data models for Inventa

pub mod equipment;
pub mod lookup;

// Re-export commonly used types
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use lookup::{Building, Department, EquipmentType, FundingSource, Manufacturer, Room};
