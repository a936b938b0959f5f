//! Natural-language filter translation endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppResult, filter::EquipmentFilter};

#[derive(Deserialize, ToSchema)]
pub struct TranslateQueryRequest {
    /// Free-text query, e.g. "active CT scanners bought after 2018"
    pub query: String,
}

/// Translate a free-text query into a filter fragment
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translate",
    request_body = TranslateQueryRequest,
    responses(
        (status = 200, description = "Filter fragment", body = EquipmentFilter),
        (status = 502, description = "Translation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn translate_query(
    State(state): State<crate::AppState>,
    Json(request): Json<TranslateQueryRequest>,
) -> AppResult<Json<EquipmentFilter>> {
    let fragment = state.services.translate.translate(&request.query).await?;
    Ok(Json(fragment))
}
