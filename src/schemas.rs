use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Plain message body used by error responses
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

/// Validation failure body listing every missing request field
#[derive(Debug, Serialize, ToSchema)]
pub struct BadPropertyBody {
    pub message: String,
    pub missing: Vec<String>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::sitemap::sitemap,
        crate::handlers::health::health_check,
        crate::handlers::users::get_users,
        crate::handlers::people::get_people,
        crate::handlers::people::get_person,
        crate::handlers::people::create_person,
        crate::handlers::people::update_person,
        crate::handlers::people::delete_person,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::planets::create_planet,
        crate::handlers::planets::update_planet,
        crate::handlers::planets::delete_planet,
        crate::handlers::favorites::get_favorites,
        crate::handlers::favorites::create_people_favorite,
        crate::handlers::favorites::delete_people_favorite,
    ),
    components(
        schemas(
            MessageBody,
            BadPropertyBody,
            HealthResponse,
            crate::handlers::users::UserResponse,
            crate::handlers::people::PersonPayload,
            crate::handlers::people::PersonResponse,
            crate::handlers::planets::PlanetPayload,
            crate::handlers::planets::PlanetResponse,
            crate::handlers::favorites::FavoriteResponse,
        )
    ),
    tags(
        (name = "meta", description = "Route map and health endpoints"),
        (name = "users", description = "User listing"),
        (name = "people", description = "People catalog CRUD"),
        (name = "planets", description = "Planet catalog CRUD"),
        (name = "favorites", description = "User favorites"),
    ),
    info(
        title = "Starcat API",
        description = "Catalog API over people, planets and user favorites",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
