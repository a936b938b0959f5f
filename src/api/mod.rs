//! API handlers for Inventa REST endpoints

pub mod equipment;
pub mod health;
pub mod lookups;
pub mod openapi;
pub mod translate;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment", post(equipment::create_equipment))
        .route("/equipment/:id", put(equipment::update_equipment))
        .route("/equipment/:id", delete(equipment::delete_equipment))
        // Lookup data
        .route("/manufacturers", get(lookups::list_manufacturers))
        .route("/equipment-types", get(lookups::list_equipment_types))
        .route("/buildings", get(lookups::list_buildings))
        .route("/departments", get(lookups::list_departments))
        .route("/rooms", get(lookups::list_rooms))
        .route("/funding-sources", get(lookups::list_funding_sources))
        // Natural-language filter translation
        .route("/translate", post(translate::translate_query))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
