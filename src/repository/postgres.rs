//! Postgres-backed inventory repository (sqlx connection pool).

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::InventoryRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        Building, CreateEquipment, Department, Equipment, EquipmentType, FundingSource,
        Manufacturer, Room, UpdateEquipment,
    },
};

/// Equipment listing with lookup display fields resolved through LEFT
/// JOINs; missing references simply yield NULLs.
const EQUIPMENT_SELECT: &str = r#"
    SELECT
        e.*,
        et.type_name,
        et.type_code,
        m.manufacturer_name,
        r.room_name,
        r.room_code,
        r.floor_number,
        d.dept_name,
        d.dept_code,
        b.building_name,
        b.building_code
    FROM equipment e
    LEFT JOIN equipment_types et ON e.equipment_type_id = et.equipment_type_id
    LEFT JOIN manufacturers m ON e.manufacturer_id = m.manufacturer_id
    LEFT JOIN rooms r ON e.room_id = r.room_id
    LEFT JOIN departments d ON r.department_id = d.department_id
    LEFT JOIN buildings b ON d.building_id = b.building_id
"#;

#[derive(Clone)]
pub struct PgInventory {
    pool: Pool<Postgres>,
}

impl PgInventory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch a single record with lookups resolved.
    async fn fetch_by_id(&self, id: i32) -> AppResult<Equipment> {
        let query = format!("{} WHERE e.equipment_id = $1", EQUIPMENT_SELECT);
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }
}

#[async_trait]
impl InventoryRepository for PgInventory {
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        let query = format!("{} ORDER BY e.equipment_id DESC", EQUIPMENT_SELECT);
        let rows = sqlx::query_as::<_, Equipment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn add_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO equipment (
                inventory_code, equipment_name, equipment_type_id, manufacturer_id,
                model_number, serial_number, year_manufactured, purchase_date,
                installation_date, warranty_expiry_date, next_maintenance_date,
                purchase_price, current_value, ownership_type, room_id,
                equipment_status, condition_rating, funding_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING equipment_id
            "#,
        )
        .bind(&data.inventory_code)
        .bind(&data.equipment_name)
        .bind(data.equipment_type_id)
        .bind(data.manufacturer_id)
        .bind(&data.model_number)
        .bind(&data.serial_number)
        .bind(data.parsed_year())
        .bind(data.purchase_date)
        .bind(data.installation_date)
        .bind(data.warranty_expiry_date)
        .bind(data.next_maintenance_date)
        .bind(data.parsed_purchase_price())
        .bind(data.parsed_current_value())
        .bind(&data.ownership_type)
        .bind(data.room_id)
        .bind(&data.equipment_status)
        .bind(data.condition_rating)
        .bind(data.funding_id)
        .fetch_one(&self.pool)
        .await?;

        self.fetch_by_id(id).await
    }

    async fn update_equipment(&self, id: i32, changes: &UpdateEquipment) -> AppResult<Equipment> {
        if changes.is_empty() {
            return self.fetch_by_id(id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(changes.inventory_code, "inventory_code");
        add_field!(changes.equipment_name, "equipment_name");
        add_field!(changes.equipment_type_id, "equipment_type_id");
        add_field!(changes.manufacturer_id, "manufacturer_id");
        add_field!(changes.model_number, "model_number");
        add_field!(changes.serial_number, "serial_number");
        add_field!(changes.year_manufactured, "year_manufactured");
        add_field!(changes.purchase_date, "purchase_date");
        add_field!(changes.installation_date, "installation_date");
        add_field!(changes.warranty_expiry_date, "warranty_expiry_date");
        add_field!(changes.next_maintenance_date, "next_maintenance_date");
        add_field!(changes.purchase_price, "purchase_price");
        add_field!(changes.current_value, "current_value");
        add_field!(changes.ownership_type, "ownership_type");
        add_field!(changes.room_id, "room_id");
        add_field!(changes.equipment_status, "equipment_status");
        add_field!(changes.condition_rating, "condition_rating");
        add_field!(changes.funding_id, "funding_id");

        let query = format!(
            "UPDATE equipment SET {} WHERE equipment_id = {} RETURNING equipment_id",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_scalar::<_, i32>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(changes.inventory_code);
        bind_field!(changes.equipment_name);
        bind_field!(changes.equipment_type_id);
        bind_field!(changes.manufacturer_id);
        bind_field!(changes.model_number);
        bind_field!(changes.serial_number);
        bind_field!(changes.year_manufactured);
        bind_field!(changes.purchase_date);
        bind_field!(changes.installation_date);
        bind_field!(changes.warranty_expiry_date);
        bind_field!(changes.next_maintenance_date);
        bind_field!(changes.purchase_price);
        bind_field!(changes.current_value);
        bind_field!(changes.ownership_type);
        bind_field!(changes.room_id);
        bind_field!(changes.equipment_status);
        bind_field!(changes.condition_rating);
        bind_field!(changes.funding_id);

        let updated_id = builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        self.fetch_by_id(updated_id).await
    }

    async fn delete_equipment(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE equipment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        let rows = sqlx::query_as::<_, Manufacturer>(
            "SELECT * FROM manufacturers ORDER BY manufacturer_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_equipment_types(&self) -> AppResult<Vec<EquipmentType>> {
        let rows =
            sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types ORDER BY type_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn list_buildings(&self) -> AppResult<Vec<Building>> {
        let rows = sqlx::query_as::<_, Building>("SELECT * FROM buildings ORDER BY building_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, Department>("SELECT * FROM departments ORDER BY dept_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_funding_sources(&self) -> AppResult<Vec<FundingSource>> {
        let rows = sqlx::query_as::<_, FundingSource>(
            "SELECT * FROM funding_sources ORDER BY funding_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
