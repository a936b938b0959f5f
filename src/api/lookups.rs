//! Read-only lookup data endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::lookup::{Building, Department, EquipmentType, FundingSource, Manufacturer, Room},
};

/// List manufacturers
#[utoipa::path(
    get,
    path = "/manufacturers",
    tag = "lookups",
    responses(
        (status = 200, description = "Manufacturer list", body = Vec<Manufacturer>)
    )
)]
pub async fn list_manufacturers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Manufacturer>>> {
    let rows = state.services.inventory.manufacturers().await?;
    Ok(Json(rows))
}

/// List equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "lookups",
    responses(
        (status = 200, description = "Equipment type list", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let rows = state.services.inventory.equipment_types().await?;
    Ok(Json(rows))
}

/// List buildings
#[utoipa::path(
    get,
    path = "/buildings",
    tag = "lookups",
    responses(
        (status = 200, description = "Building list", body = Vec<Building>)
    )
)]
pub async fn list_buildings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Building>>> {
    let rows = state.services.inventory.buildings().await?;
    Ok(Json(rows))
}

/// List departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "lookups",
    responses(
        (status = 200, description = "Department list", body = Vec<Department>)
    )
)]
pub async fn list_departments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Department>>> {
    let rows = state.services.inventory.departments().await?;
    Ok(Json(rows))
}

/// List rooms
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "lookups",
    responses(
        (status = 200, description = "Room list", body = Vec<Room>)
    )
)]
pub async fn list_rooms(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Room>>> {
    let rows = state.services.inventory.rooms().await?;
    Ok(Json(rows))
}

/// List funding sources
#[utoipa::path(
    get,
    path = "/funding-sources",
    tag = "lookups",
    responses(
        (status = 200, description = "Funding source list", body = Vec<FundingSource>)
    )
)]
pub async fn list_funding_sources(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<FundingSource>>> {
    let rows = state.services.inventory.funding_sources().await?;
    Ok(Json(rows))
}
