//! Lookup entities: static reference data joined into equipment records
//! for display and filtering.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Manufacturer {
    pub manufacturer_id: i32,
    pub manufacturer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub equipment_type_id: i32,
    pub type_name: String,
    /// Short code used by filter allow-sets (e.g. "MRI", "CT")
    pub type_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Building {
    pub building_id: i32,
    pub building_name: String,
    pub building_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Department {
    pub department_id: i32,
    pub dept_name: String,
    pub dept_code: String,
    pub building_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub room_id: i32,
    pub room_name: String,
    pub room_code: String,
    pub floor_number: Option<i32>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FundingSource {
    pub funding_id: i32,
    pub funding_name: String,
}
