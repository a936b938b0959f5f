//! Composite equipment filter and its evaluation.
//!
//! A filter is a bag of optional predicates; unset fields (and empty
//! allow-sets) impose no constraint. Evaluation is pure and synchronous:
//! callers re-run it whenever the record list or the filter changes, passing
//! the current moment explicitly.

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Equipment;

/// Composite filter over the equipment list.
///
/// Two fragments of this type exist at any time (search-derived and
/// UI-derived); they are merged with [`EquipmentFilter::overlay`] before
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentFilter {
    /// Case-insensitive substring matched against name, model number and
    /// serial number; any single hit passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// Allowed equipment type codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<Vec<String>>,
    /// Allowed status values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
    /// Allowed manufacturer names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Vec<String>>,
    /// Inclusive lower bound on the purchase year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_year_min: Option<i32>,
    /// Inclusive upper bound on the purchase year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_year_max: Option<i32>,
    /// Maximum days until the next maintenance date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_due_in_days: Option<i64>,
}

impl EquipmentFilter {
    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == EquipmentFilter::default()
    }

    /// Merge `over` on top of `self` by per-key shallow override: every
    /// field set in `over` wins, every other field keeps `self`'s value.
    /// An empty allow-set counts as set.
    pub fn overlay(&self, over: &EquipmentFilter) -> EquipmentFilter {
        EquipmentFilter {
            search_text: over.search_text.clone().or_else(|| self.search_text.clone()),
            equipment_type: over
                .equipment_type
                .clone()
                .or_else(|| self.equipment_type.clone()),
            status: over.status.clone().or_else(|| self.status.clone()),
            manufacturer: over
                .manufacturer
                .clone()
                .or_else(|| self.manufacturer.clone()),
            purchase_year_min: over.purchase_year_min.or(self.purchase_year_min),
            purchase_year_max: over.purchase_year_max.or(self.purchase_year_max),
            maintenance_due_in_days: over
                .maintenance_due_in_days
                .or(self.maintenance_due_in_days),
        }
    }

    /// Whether `item` satisfies every supplied predicate.
    pub fn matches(&self, item: &Equipment, now: DateTime<Utc>) -> bool {
        if let Some(text) = &self.search_text {
            if !text.is_empty() {
                let needle = text.to_lowercase();
                let hit = item.equipment_name.to_lowercase().contains(&needle)
                    || item.model_number.to_lowercase().contains(&needle)
                    || item.serial_number.to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }
        }

        // Membership predicates compare resolved display values; a record
        // whose lookup did not resolve never matches a non-empty allow-set.
        if let Some(codes) = &self.equipment_type {
            if !codes.is_empty() {
                match &item.type_code {
                    Some(code) if codes.contains(code) => {}
                    _ => return false,
                }
            }
        }
        if let Some(statuses) = &self.status {
            if !statuses.is_empty() && !statuses.contains(&item.equipment_status) {
                return false;
            }
        }
        if let Some(names) = &self.manufacturer {
            if !names.is_empty() {
                match &item.manufacturer_name {
                    Some(name) if names.contains(name) => {}
                    _ => return false,
                }
            }
        }

        // Year bounds only constrain records that have a purchase date.
        if let (Some(min), Some(date)) = (self.purchase_year_min, item.purchase_date) {
            if date.year() < min {
                return false;
            }
        }
        if let (Some(max), Some(date)) = (self.purchase_year_max, item.purchase_date) {
            if date.year() > max {
                return false;
            }
        }

        if let (Some(window), Some(due)) = (self.maintenance_due_in_days, item.next_maintenance_date)
        {
            let days = days_until(now, due);
            if days < 0 || days > window {
                return false;
            }
        }

        true
    }
}

/// Apply `filter` to `records`, preserving input order.
pub fn filter_equipment<'a>(
    records: &'a [Equipment],
    filter: &EquipmentFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Equipment> {
    records.iter().filter(|item| filter.matches(item, now)).collect()
}

/// Whole days from `now` until midnight of `due`, rounded up. A due date
/// less than one whole day in the past still yields zero.
fn days_until(now: DateTime<Utc>, due: chrono::NaiveDate) -> i64 {
    let due_start = due.and_time(NaiveTime::MIN).and_utc();
    let secs = (due_start - now).num_seconds();
    secs.div_euclid(86_400) + i64::from(secs.rem_euclid(86_400) > 0)
}
