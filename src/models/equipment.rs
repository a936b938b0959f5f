//! Equipment model

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One physical asset's tracked attributes, with lookup display fields
/// resolved where the backing store supports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub equipment_id: i32,
    pub inventory_code: String,
    pub equipment_name: String,
    pub equipment_type_id: Option<i32>,
    pub manufacturer_id: Option<i32>,
    pub model_number: String,
    pub serial_number: String,
    pub year_manufactured: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub purchase_price: Decimal,
    pub current_value: Decimal,
    /// "owned", "leased" or "rented"
    pub ownership_type: String,
    pub room_id: Option<i32>,
    /// "active", "maintenance", "retired", "broken"
    pub equipment_status: String,
    /// 1 (poor) to 5 (excellent)
    pub condition_rating: Option<i16>,
    pub funding_id: Option<i32>,

    // Resolved lookup fields (LEFT JOINs); None when the reference is
    // missing or the lookup row no longer exists.
    pub type_name: Option<String>,
    pub type_code: Option<String>,
    pub manufacturer_name: Option<String>,
    pub room_name: Option<String>,
    pub room_code: Option<String>,
    pub floor_number: Option<i32>,
    pub dept_name: Option<String>,
    pub dept_code: Option<String>,
    pub building_name: Option<String>,
    pub building_code: Option<String>,
}

/// Create equipment request.
///
/// Numeric fields arrive as form text; blank or malformed values fall back
/// to defaults (current calendar year, zero price) instead of being
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub inventory_code: String,
    pub equipment_name: String,
    pub equipment_type_id: Option<i32>,
    pub manufacturer_id: Option<i32>,
    #[serde(default)]
    pub model_number: String,
    #[serde(default)]
    pub serial_number: String,
    pub year_manufactured: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub purchase_price: Option<String>,
    pub current_value: Option<String>,
    #[serde(default)]
    pub ownership_type: String,
    pub room_id: Option<i32>,
    #[serde(default)]
    pub equipment_status: String,
    pub condition_rating: Option<i16>,
    pub funding_id: Option<i32>,
}

impl CreateEquipment {
    /// Manufacture year, defaulting to the current calendar year.
    pub fn parsed_year(&self) -> i32 {
        parse_year_or_current(self.year_manufactured.as_deref())
    }

    pub fn parsed_purchase_price(&self) -> Decimal {
        parse_price_or_zero(self.purchase_price.as_deref())
    }

    pub fn parsed_current_value(&self) -> Decimal {
        parse_price_or_zero(self.current_value.as_deref())
    }
}

/// Update equipment request: only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_manufactured: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_maintenance_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_rating: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_id: Option<i32>,
}

impl UpdateEquipment {
    /// True when no field is supplied; such an update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.inventory_code.is_none()
            && self.equipment_name.is_none()
            && self.equipment_type_id.is_none()
            && self.manufacturer_id.is_none()
            && self.model_number.is_none()
            && self.serial_number.is_none()
            && self.year_manufactured.is_none()
            && self.purchase_date.is_none()
            && self.installation_date.is_none()
            && self.warranty_expiry_date.is_none()
            && self.next_maintenance_date.is_none()
            && self.purchase_price.is_none()
            && self.current_value.is_none()
            && self.ownership_type.is_none()
            && self.room_id.is_none()
            && self.equipment_status.is_none()
            && self.condition_rating.is_none()
            && self.funding_id.is_none()
    }
}

/// Parse a year from form text, falling back to the current calendar year
/// when blank or malformed.
pub fn parse_year_or_current(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or_else(|| Utc::now().year())
}

/// Parse a monetary amount from form text, falling back to zero when blank
/// or malformed.
pub fn parse_price_or_zero(raw: Option<&str>) -> Decimal {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO)
}
