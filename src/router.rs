use crate::handlers::{
    favorites::{create_people_favorite, delete_people_favorite, get_favorites},
    health::health_check,
    people::{create_person, delete_person, get_people, get_person, update_person},
    planets::{create_planet, delete_planet, get_planet, get_planets, update_planet},
    sitemap::sitemap,
    users::get_users,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Route map and health check
        .route("/", get(sitemap))
        .route("/health", get(health_check))
        // Users are read-only in this contract
        .route("/user", get(get_users))
        // People CRUD routes
        .route("/people", get(get_people))
        .route("/people", post(create_person))
        .route("/people/:people_id", get(get_person))
        .route("/people/:people_id", put(update_person))
        .route("/people/:people_id", delete(delete_person))
        // Planet CRUD routes
        .route("/planets", get(get_planets))
        .route("/planets", post(create_planet))
        .route("/planets/:planets_id", get(get_planet))
        .route("/planets/:planets_id", put(update_planet))
        .route("/planets/:planets_id", delete(delete_planet))
        // Favorite routes, keyed by a (user, person) pair
        .route("/favorite/", get(get_favorites))
        .route(
            "/favorite/:user_id/people/:people_id",
            post(create_people_favorite),
        )
        .route(
            "/favorite/:user_id/people/:people_id",
            delete(delete_people_favorite),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
