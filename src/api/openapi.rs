//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, lookups, translate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventa API",
        version = "1.0.0",
        description = "Equipment Inventory Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Inventa Team")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Lookups
        lookups::list_manufacturers,
        lookups::list_equipment_types,
        lookups::list_buildings,
        lookups::list_departments,
        lookups::list_rooms,
        lookups::list_funding_sources,
        // Translation
        translate::translate_query,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Lookups
            crate::models::lookup::Manufacturer,
            crate::models::lookup::EquipmentType,
            crate::models::lookup::Building,
            crate::models::lookup::Department,
            crate::models::lookup::Room,
            crate::models::lookup::FundingSource,
            // Filter
            crate::filter::EquipmentFilter,
            translate::TranslateQueryRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment inventory management"),
        (name = "lookups", description = "Static reference data"),
        (name = "translate", description = "Natural-language filter translation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
