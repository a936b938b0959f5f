//! REST-client inventory repository: talks to the equipment API of an
//! upstream instance instead of a database.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::InventoryRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        Building, CreateEquipment, Department, Equipment, EquipmentType, FundingSource,
        Manufacturer, Room, UpdateEquipment,
    },
};

#[derive(Clone)]
pub struct RestInventory {
    client: reqwest::Client,
    base_url: String,
}

impl RestInventory {
    /// `base_url` is the upstream prefix up to and including `/api`,
    /// e.g. `http://localhost:3001/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Map a non-success upstream status; 404 keeps its not-found meaning
    /// so callers see the same contract as with a local store.
    async fn checked(response: Response, what: &str) -> AppResult<Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} not found", what)));
        }
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "failed to {} (upstream returned HTTP {})",
                what, status
            )));
        }
        Ok(response)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> AppResult<Vec<T>> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("failed to {}: {}", what, e)))?;
        Self::checked(response, what)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("failed to decode {}: {}", what, e)))
    }
}

#[async_trait]
impl InventoryRepository for RestInventory {
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        self.get_list("equipment", "fetch equipment").await
    }

    async fn add_equipment(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let response = self
            .client
            .post(self.url("equipment"))
            .json(data)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("failed to add equipment: {}", e)))?;
        Self::checked(response, "add equipment")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("failed to decode added equipment: {}", e)))
    }

    async fn update_equipment(&self, id: i32, changes: &UpdateEquipment) -> AppResult<Equipment> {
        let response = self
            .client
            .put(self.url(&format!("equipment/{}", id)))
            .json(changes)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("failed to update equipment: {}", e)))?;
        Self::checked(response, &format!("equipment {}", id))
            .await?
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("failed to decode updated equipment: {}", e)))
    }

    async fn delete_equipment(&self, id: i32) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("equipment/{}", id)))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("failed to delete equipment: {}", e)))?;
        Self::checked(response, &format!("equipment {}", id)).await?;
        Ok(())
    }

    async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        self.get_list("manufacturers", "fetch manufacturers").await
    }

    async fn list_equipment_types(&self) -> AppResult<Vec<EquipmentType>> {
        self.get_list("equipment-types", "fetch equipment types").await
    }

    async fn list_buildings(&self) -> AppResult<Vec<Building>> {
        self.get_list("buildings", "fetch buildings").await
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.get_list("departments", "fetch departments").await
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.get_list("rooms", "fetch rooms").await
    }

    async fn list_funding_sources(&self) -> AppResult<Vec<FundingSource>> {
        self.get_list("funding-sources", "fetch funding sources").await
    }
}
