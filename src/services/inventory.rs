//! Inventory service: thin pass-through over whichever repository backend
//! is wired in.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        Building, CreateEquipment, Department, Equipment, EquipmentType, FundingSource,
        Manufacturer, Room, UpdateEquipment,
    },
    repository::InventoryRepository,
};

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryRepository>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.store.list_equipment().await
    }

    pub async fn add(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        self.store.add_equipment(data).await
    }

    pub async fn update(&self, id: i32, changes: &UpdateEquipment) -> AppResult<Equipment> {
        self.store.update_equipment(id, changes).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete_equipment(id).await
    }

    pub async fn manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        self.store.list_manufacturers().await
    }

    pub async fn equipment_types(&self) -> AppResult<Vec<EquipmentType>> {
        self.store.list_equipment_types().await
    }

    pub async fn buildings(&self) -> AppResult<Vec<Building>> {
        self.store.list_buildings().await
    }

    pub async fn departments(&self) -> AppResult<Vec<Department>> {
        self.store.list_departments().await
    }

    pub async fn rooms(&self) -> AppResult<Vec<Room>> {
        self.store.list_rooms().await
    }

    pub async fn funding_sources(&self) -> AppResult<Vec<FundingSource>> {
        self.store.list_funding_sources().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repository::MockInventoryRepository;

    #[tokio::test]
    async fn update_forwards_to_store() {
        let mut store = MockInventoryRepository::new();
        store
            .expect_update_equipment()
            .withf(|id, changes| *id == 7 && changes.condition_rating == Some(3))
            .returning(|id, _| {
                Ok(Equipment {
                    equipment_id: id,
                    condition_rating: Some(3),
                    ..Default::default()
                })
            });

        let service = InventoryService::new(Arc::new(store));
        let changes = UpdateEquipment {
            condition_rating: Some(3),
            ..Default::default()
        };
        let updated = service.update(7, &changes).await.unwrap();
        assert_eq!(updated.equipment_id, 7);
        assert_eq!(updated.condition_rating, Some(3));
    }

    #[tokio::test]
    async fn errors_propagate_unchanged() {
        let mut store = MockInventoryRepository::new();
        store
            .expect_delete_equipment()
            .returning(|id| Err(AppError::NotFound(format!("Equipment {} not found", id))));

        let service = InventoryService::new(Arc::new(store));
        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
