//! In-memory inventory repository for offline/demo mode. Also serves as
//! the backend for router-level tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::InventoryRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        Building, CreateEquipment, Department, Equipment, EquipmentType, FundingSource,
        Manufacturer, Room, UpdateEquipment,
    },
};

/// In-process copies of the lookup tables, used to resolve display fields
/// the way the SQL variant does with LEFT JOINs.
struct LookupTables {
    manufacturers: Vec<Manufacturer>,
    equipment_types: Vec<EquipmentType>,
    buildings: Vec<Building>,
    departments: Vec<Department>,
    rooms: Vec<Room>,
    funding_sources: Vec<FundingSource>,
}

impl LookupTables {
    fn standard() -> Self {
        Self {
            manufacturers: vec![
                Manufacturer { manufacturer_id: 1, manufacturer_name: "GE Healthcare".into() },
                Manufacturer { manufacturer_id: 2, manufacturer_name: "Siemens Healthineers".into() },
                Manufacturer { manufacturer_id: 3, manufacturer_name: "Philips".into() },
                Manufacturer { manufacturer_id: 4, manufacturer_name: "Thermo Fisher".into() },
            ],
            equipment_types: vec![
                EquipmentType { equipment_type_id: 1, type_name: "MRI Scanner".into(), type_code: "MRI".into() },
                EquipmentType { equipment_type_id: 2, type_name: "CT Scanner".into(), type_code: "CT".into() },
                EquipmentType { equipment_type_id: 3, type_name: "Ultrasound".into(), type_code: "US".into() },
                EquipmentType { equipment_type_id: 4, type_name: "Ventilator".into(), type_code: "VENT".into() },
                EquipmentType { equipment_type_id: 5, type_name: "Centrifuge".into(), type_code: "CENT".into() },
            ],
            buildings: vec![
                Building { building_id: 1, building_name: "Main Hospital".into(), building_code: "MAIN".into() },
                Building { building_id: 2, building_name: "Research Wing".into(), building_code: "RES".into() },
            ],
            departments: vec![
                Department { department_id: 1, dept_name: "Radiology".into(), dept_code: "RAD".into(), building_id: Some(1) },
                Department { department_id: 2, dept_name: "Intensive Care".into(), dept_code: "ICU".into(), building_id: Some(1) },
                Department { department_id: 3, dept_name: "Laboratory".into(), dept_code: "LAB".into(), building_id: Some(2) },
            ],
            rooms: vec![
                Room { room_id: 1, room_name: "Imaging Suite 1".into(), room_code: "IMG-1".into(), floor_number: Some(1), department_id: Some(1) },
                Room { room_id: 2, room_name: "ICU Bay 2".into(), room_code: "ICU-2".into(), floor_number: Some(2), department_id: Some(2) },
                Room { room_id: 3, room_name: "Lab Room 3".into(), room_code: "LAB-3".into(), floor_number: Some(1), department_id: Some(3) },
            ],
            funding_sources: vec![
                FundingSource { funding_id: 1, funding_name: "Hospital Budget".into() },
                FundingSource { funding_id: 2, funding_name: "Research Grant".into() },
                FundingSource { funding_id: 3, funding_name: "State Subsidy".into() },
            ],
        }
    }

    /// Fill the resolved display fields of `record` from its foreign keys,
    /// clearing them first so stale values never survive an update.
    fn resolve(&self, record: &mut Equipment) {
        record.type_name = None;
        record.type_code = None;
        record.manufacturer_name = None;
        record.room_name = None;
        record.room_code = None;
        record.floor_number = None;
        record.dept_name = None;
        record.dept_code = None;
        record.building_name = None;
        record.building_code = None;

        if let Some(type_id) = record.equipment_type_id {
            if let Some(et) = self
                .equipment_types
                .iter()
                .find(|et| et.equipment_type_id == type_id)
            {
                record.type_name = Some(et.type_name.clone());
                record.type_code = Some(et.type_code.clone());
            }
        }
        if let Some(manufacturer_id) = record.manufacturer_id {
            record.manufacturer_name = self
                .manufacturers
                .iter()
                .find(|m| m.manufacturer_id == manufacturer_id)
                .map(|m| m.manufacturer_name.clone());
        }
        if let Some(room_id) = record.room_id {
            if let Some(room) = self.rooms.iter().find(|r| r.room_id == room_id) {
                record.room_name = Some(room.room_name.clone());
                record.room_code = Some(room.room_code.clone());
                record.floor_number = room.floor_number;
                if let Some(dept) = room.department_id.and_then(|dept_id| {
                    self.departments.iter().find(|d| d.department_id == dept_id)
                }) {
                    record.dept_name = Some(dept.dept_name.clone());
                    record.dept_code = Some(dept.dept_code.clone());
                    if let Some(building) = dept.building_id.and_then(|building_id| {
                        self.buildings.iter().find(|b| b.building_id == building_id)
                    }) {
                        record.building_name = Some(building.building_name.clone());
                        record.building_code = Some(building.building_code.clone());
                    }
                }
            }
        }
    }
}

struct MemState {
    next_id: i32,
    records: HashMap<i32, Equipment>,
    tables: LookupTables,
}

pub struct MemInventory {
    state: RwLock<MemState>,
}

impl MemInventory {
    /// Empty store with the standard reference tables.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemState {
                next_id: 1,
                records: HashMap::new(),
                tables: LookupTables::standard(),
            }),
        }
    }

    /// Store pre-seeded with a handful of records, for demo mode.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        {
            let mut state = match store.state.write() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            for mut record in demo_records() {
                let id = state.next_id;
                state.next_id += 1;
                record.equipment_id = id;
                state.tables.resolve(&mut record);
                state.records.insert(id, record);
            }
        }
        store
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, MemState>> {
        self.state
            .read()
            .map_err(|_| AppError::Internal("inventory store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, MemState>> {
        self.state
            .write()
            .map_err(|_| AppError::Internal("inventory store lock poisoned".to_string()))
    }
}

impl Default for MemInventory {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_records() -> Vec<Equipment> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    vec![
        Equipment {
            inventory_code: "INV-0001".into(),
            equipment_name: "Magnetom Vida 3T".into(),
            equipment_type_id: Some(1),
            manufacturer_id: Some(2),
            model_number: "Vida 3T".into(),
            serial_number: "SHS-431207".into(),
            year_manufactured: Some(2021),
            purchase_date: date(2021, 9, 14),
            installation_date: date(2021, 11, 2),
            warranty_expiry_date: date(2026, 11, 2),
            next_maintenance_date: date(2026, 9, 1),
            purchase_price: Decimal::from(1_850_000),
            current_value: Decimal::from(1_320_000),
            ownership_type: "owned".into(),
            room_id: Some(1),
            equipment_status: "active".into(),
            condition_rating: Some(5),
            funding_id: Some(3),
            ..Default::default()
        },
        Equipment {
            inventory_code: "INV-0002".into(),
            equipment_name: "Evita V800 Ventilator".into(),
            equipment_type_id: Some(4),
            manufacturer_id: Some(3),
            model_number: "V800".into(),
            serial_number: "PH-88321".into(),
            year_manufactured: Some(2019),
            purchase_date: date(2019, 4, 3),
            installation_date: date(2019, 4, 20),
            warranty_expiry_date: date(2024, 4, 20),
            next_maintenance_date: date(2026, 8, 20),
            purchase_price: Decimal::from(42_000),
            current_value: Decimal::from(21_000),
            ownership_type: "leased".into(),
            room_id: Some(2),
            equipment_status: "maintenance".into(),
            condition_rating: Some(3),
            funding_id: Some(1),
            ..Default::default()
        },
        Equipment {
            inventory_code: "INV-0003".into(),
            equipment_name: "Sorvall LYNX 6000".into(),
            equipment_type_id: Some(5),
            manufacturer_id: Some(4),
            model_number: "LYNX 6000".into(),
            serial_number: "TF-55102".into(),
            year_manufactured: Some(2016),
            purchase_date: date(2016, 2, 26),
            purchase_price: Decimal::from(27_500),
            current_value: Decimal::from(8_200),
            ownership_type: "owned".into(),
            room_id: Some(3),
            equipment_status: "retired".into(),
            condition_rating: Some(2),
            funding_id: Some(2),
            ..Default::default()
        },
    ]
}

#[async_trait]
impl InventoryRepository for MemInventory {
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        let state = self.read()?;
        let mut records: Vec<Equipment> = state.records.values().cloned().collect();
        records.sort_by(|a, b| b.equipment_id.cmp(&a.equipment_id));
        Ok(records)
    }

    async fn add_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let mut state = self.write()?;
        let id = state.next_id;
        state.next_id += 1;

        let mut record = Equipment {
            equipment_id: id,
            inventory_code: data.inventory_code.clone(),
            equipment_name: data.equipment_name.clone(),
            equipment_type_id: data.equipment_type_id,
            manufacturer_id: data.manufacturer_id,
            model_number: data.model_number.clone(),
            serial_number: data.serial_number.clone(),
            year_manufactured: Some(data.parsed_year()),
            purchase_date: data.purchase_date,
            installation_date: data.installation_date,
            warranty_expiry_date: data.warranty_expiry_date,
            next_maintenance_date: data.next_maintenance_date,
            purchase_price: data.parsed_purchase_price(),
            current_value: data.parsed_current_value(),
            ownership_type: data.ownership_type.clone(),
            room_id: data.room_id,
            equipment_status: data.equipment_status.clone(),
            condition_rating: data.condition_rating,
            funding_id: data.funding_id,
            ..Default::default()
        };
        state.tables.resolve(&mut record);
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update_equipment(&self, id: i32, changes: &UpdateEquipment) -> AppResult<Equipment> {
        let mut state = self.write()?;
        let MemState { records, tables, .. } = &mut *state;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        macro_rules! apply_field {
            ($source:expr, $target:expr) => {
                if let Some(val) = &$source {
                    $target = val.clone();
                }
            };
        }
        macro_rules! apply_opt_field {
            ($source:expr, $target:expr) => {
                if let Some(val) = $source {
                    $target = Some(val);
                }
            };
        }

        apply_field!(changes.inventory_code, record.inventory_code);
        apply_field!(changes.equipment_name, record.equipment_name);
        apply_opt_field!(changes.equipment_type_id, record.equipment_type_id);
        apply_opt_field!(changes.manufacturer_id, record.manufacturer_id);
        apply_field!(changes.model_number, record.model_number);
        apply_field!(changes.serial_number, record.serial_number);
        apply_opt_field!(changes.year_manufactured, record.year_manufactured);
        apply_opt_field!(changes.purchase_date, record.purchase_date);
        apply_opt_field!(changes.installation_date, record.installation_date);
        apply_opt_field!(changes.warranty_expiry_date, record.warranty_expiry_date);
        apply_opt_field!(changes.next_maintenance_date, record.next_maintenance_date);
        if let Some(price) = changes.purchase_price {
            record.purchase_price = price;
        }
        if let Some(value) = changes.current_value {
            record.current_value = value;
        }
        apply_field!(changes.ownership_type, record.ownership_type);
        apply_opt_field!(changes.room_id, record.room_id);
        apply_field!(changes.equipment_status, record.equipment_status);
        apply_opt_field!(changes.condition_rating, record.condition_rating);
        apply_opt_field!(changes.funding_id, record.funding_id);

        tables.resolve(record);
        Ok(record.clone())
    }

    async fn delete_equipment(&self, id: i32) -> AppResult<()> {
        let mut state = self.write()?;
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        let state = self.read()?;
        let mut rows = state.tables.manufacturers.clone();
        rows.sort_by(|a, b| a.manufacturer_name.cmp(&b.manufacturer_name));
        Ok(rows)
    }

    async fn list_equipment_types(&self) -> AppResult<Vec<EquipmentType>> {
        let state = self.read()?;
        let mut rows = state.tables.equipment_types.clone();
        rows.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        Ok(rows)
    }

    async fn list_buildings(&self) -> AppResult<Vec<Building>> {
        let state = self.read()?;
        let mut rows = state.tables.buildings.clone();
        rows.sort_by(|a, b| a.building_name.cmp(&b.building_name));
        Ok(rows)
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        let state = self.read()?;
        let mut rows = state.tables.departments.clone();
        rows.sort_by(|a, b| a.dept_name.cmp(&b.dept_name));
        Ok(rows)
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let state = self.read()?;
        let mut rows = state.tables.rooms.clone();
        rows.sort_by(|a, b| a.room_name.cmp(&b.room_name));
        Ok(rows)
    }

    async fn list_funding_sources(&self) -> AppResult<Vec<FundingSource>> {
        let state = self.read()?;
        let mut rows = state.tables.funding_sources.clone();
        rows.sort_by(|a, b| a.funding_name.cmp(&b.funding_name));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    fn creation(name: &str) -> CreateEquipment {
        CreateEquipment {
            inventory_code: format!("INV-{}", name),
            equipment_name: name.to_string(),
            equipment_status: "active".to_string(),
            ownership_type: "owned".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids_and_lists_newest_first() {
        let repo = MemInventory::new();
        let first = repo.add_equipment(&creation("first")).await.unwrap();
        let second = repo.add_equipment(&creation("second")).await.unwrap();
        assert_eq!(first.equipment_id, 1);
        assert_eq!(second.equipment_id, 2);

        let listed = repo.list_equipment().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|e| e.equipment_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn blank_numeric_text_falls_back_to_defaults() {
        let repo = MemInventory::new();
        let mut data = creation("scanner");
        data.year_manufactured = Some(String::new());
        data.purchase_price = Some(String::new());

        let stored = repo.add_equipment(&data).await.unwrap();
        assert_eq!(stored.purchase_price, Decimal::ZERO);
        assert_eq!(stored.current_value, Decimal::ZERO);
        assert_eq!(stored.year_manufactured, Some(Utc::now().year()));
    }

    #[tokio::test]
    async fn add_resolves_lookup_display_fields() {
        let repo = MemInventory::new();
        let mut data = creation("scanner");
        data.equipment_type_id = Some(2);
        data.manufacturer_id = Some(1);
        data.room_id = Some(1);

        let stored = repo.add_equipment(&data).await.unwrap();
        assert_eq!(stored.type_code.as_deref(), Some("CT"));
        assert_eq!(stored.manufacturer_name.as_deref(), Some("GE Healthcare"));
        assert_eq!(stored.room_code.as_deref(), Some("IMG-1"));
        assert_eq!(stored.dept_code.as_deref(), Some("RAD"));
        assert_eq!(stored.building_code.as_deref(), Some("MAIN"));
    }

    #[tokio::test]
    async fn unknown_lookup_reference_resolves_to_none() {
        let repo = MemInventory::new();
        let mut data = creation("mystery");
        data.equipment_type_id = Some(999);

        let stored = repo.add_equipment(&data).await.unwrap();
        assert_eq!(stored.type_code, None);
        assert_eq!(stored.type_name, None);
    }

    #[tokio::test]
    async fn partial_update_changes_only_named_fields() {
        let repo = MemInventory::new();
        let mut data = creation("pump");
        data.condition_rating = Some(5);
        let stored = repo.add_equipment(&data).await.unwrap();

        let changes = UpdateEquipment {
            condition_rating: Some(3),
            ..Default::default()
        };
        let updated = repo
            .update_equipment(stored.equipment_id, &changes)
            .await
            .unwrap();

        assert_eq!(updated.condition_rating, Some(3));
        assert_eq!(updated.equipment_name, stored.equipment_name);
        assert_eq!(updated.inventory_code, stored.inventory_code);
        assert_eq!(updated.equipment_status, stored.equipment_status);
        assert_eq!(updated.purchase_price, stored.purchase_price);
    }

    #[tokio::test]
    async fn update_reresolves_lookups_on_reference_change() {
        let repo = MemInventory::new();
        let mut data = creation("mobile-unit");
        data.room_id = Some(1);
        let stored = repo.add_equipment(&data).await.unwrap();
        assert_eq!(stored.dept_code.as_deref(), Some("RAD"));

        let changes = UpdateEquipment {
            room_id: Some(3),
            ..Default::default()
        };
        let updated = repo
            .update_equipment(stored.equipment_id, &changes)
            .await
            .unwrap();
        assert_eq!(updated.room_code.as_deref(), Some("LAB-3"));
        assert_eq!(updated.dept_code.as_deref(), Some("LAB"));
        assert_eq!(updated.building_code.as_deref(), Some("RES"));
    }

    #[tokio::test]
    async fn update_missing_id_reports_not_found() {
        let repo = MemInventory::new();
        let err = repo
            .update_equipment(42, &UpdateEquipment::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_list_no_longer_contains_id() {
        let repo = MemInventory::new();
        let kept = repo.add_equipment(&creation("kept")).await.unwrap();
        let doomed = repo.add_equipment(&creation("doomed")).await.unwrap();

        repo.delete_equipment(doomed.equipment_id).await.unwrap();
        let listed = repo.list_equipment().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].equipment_id, kept.equipment_id);
    }

    #[tokio::test]
    async fn delete_missing_id_reports_not_found() {
        let repo = MemInventory::new();
        let err = repo.delete_equipment(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn lookups_are_sorted_by_display_name() {
        let repo = MemInventory::new();
        let manufacturers = repo.list_manufacturers().await.unwrap();
        let names: Vec<_> = manufacturers
            .iter()
            .map(|m| m.manufacturer_name.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn demo_data_is_seeded_and_resolved() {
        let repo = MemInventory::with_demo_data();
        let listed = repo.list_equipment().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().any(|e| e.type_code.as_deref() == Some("MRI")));
    }
}
