use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::planets;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::AppState;

/// Request body for creating or replacing a planet. Mirrors the people
/// payload: optional fields, one-shot validation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PlanetPayload {
    pub name: Option<String>,
    pub diameter: Option<i32>,
}

impl PlanetPayload {
    fn complete(&self) -> Result<(String, i32), ApiError> {
        match (&self.name, self.diameter) {
            (Some(name), Some(diameter)) => Ok((name.clone(), diameter)),
            _ => {
                let mut missing = Vec::new();
                if self.name.is_none() {
                    missing.push("name");
                }
                if self.diameter.is_none() {
                    missing.push("diameter");
                }
                Err(ApiError::BadProperty { missing })
            }
        }
    }
}

/// Planet response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
}

impl From<planets::Model> for PlanetResponse {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<PlanetResponse>),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    debug!("Fetching all planets from database");

    match planets::Entity::find().all(&state.db).await {
        Ok(rows) => {
            info!("Successfully retrieved {} planets", rows.len());
            Ok(Json(rows.into_iter().map(PlanetResponse::from).collect()))
        }
        Err(db_error) => {
            error!("Failed to retrieve planets from database: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planets_id}",
    tag = "planets",
    params(
        ("planets_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_planet(
    Path(planets_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, ApiError> {
    debug!("Fetching planet with ID: {}", planets_id);

    match planets::Entity::find_by_id(planets_id).one(&state.db).await {
        Ok(Some(planet)) => {
            info!("Successfully retrieved planet with ID: {}", planet.id);
            Ok(Json(PlanetResponse::from(planet)))
        }
        Ok(None) => {
            warn!("Planet with ID {} not found", planets_id);
            Err(ApiError::NotFound)
        }
        Err(db_error) => {
            error!("Failed to retrieve planet with ID {}: {}", planets_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Create a new planet. Echoes the request body like the people route.
#[utoipa::path(
    post,
    path = "/planets",
    tag = "planets",
    request_body = PlanetPayload,
    responses(
        (status = 200, description = "Planet stored; request body echoed back", body = PlanetPayload),
        (status = 400, description = "Missing fields or storage rejection", body = crate::schemas::BadPropertyBody)
    )
)]
#[instrument]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<PlanetPayload>,
) -> Result<Json<PlanetPayload>, ApiError> {
    let (name, diameter) = payload.complete().map_err(|e| {
        warn!("Create planet rejected: {}", e);
        e
    })?;

    let new_planet = planets::ActiveModel {
        name: Set(name),
        diameter: Set(diameter),
        ..Default::default()
    };

    match new_planet.insert(&state.db).await {
        Ok(planet) => {
            info!("Planet created successfully with ID: {}", planet.id);
            Ok(Json(payload))
        }
        Err(db_error) => {
            error!("Failed to create planet: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::BAD_REQUEST,
            })
        }
    }
}

/// Replace a planet. Full-field overwrite; missing id answers 400.
#[utoipa::path(
    put,
    path = "/planets/{planets_id}",
    tag = "planets",
    params(
        ("planets_id" = i32, Path, description = "Planet ID"),
    ),
    request_body = PlanetPayload,
    responses(
        (status = 201, description = "Planet replaced", body = PlanetResponse),
        (status = 400, description = "Planet not found or missing fields", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn update_planet(
    Path(planets_id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<PlanetPayload>,
) -> Result<(StatusCode, Json<PlanetResponse>), ApiError> {
    debug!("Updating planet with ID: {}", planets_id);

    let existing = match planets::Entity::find_by_id(planets_id).one(&state.db).await {
        Ok(Some(planet)) => planet,
        Ok(None) => {
            warn!("Planet with ID {} not found for update", planets_id);
            return Err(ApiError::WriteNotFound);
        }
        Err(db_error) => {
            error!("Failed to look up planet {} for update: {}", planets_id, db_error);
            return Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
    };

    let (name, diameter) = payload.complete().map_err(|e| {
        warn!("Update planet rejected: {}", e);
        e
    })?;

    let mut planet_active: planets::ActiveModel = existing.into();
    planet_active.name = Set(name);
    planet_active.diameter = Set(diameter);

    match planet_active.update(&state.db).await {
        Ok(updated) => {
            info!("Planet with ID {} updated successfully", planets_id);
            Ok((StatusCode::CREATED, Json(PlanetResponse::from(updated))))
        }
        Err(db_error) => {
            error!("Failed to update planet with ID {}: {}", planets_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planets/{planets_id}",
    tag = "planets",
    params(
        ("planets_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 204, description = "Planet deleted; body is an empty array"),
        (status = 400, description = "Planet not found", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn delete_planet(
    Path(planets_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    debug!("Attempting to delete planet with ID: {}", planets_id);

    let existing = match planets::Entity::find_by_id(planets_id).one(&state.db).await {
        Ok(Some(planet)) => planet,
        Ok(None) => {
            warn!("Planet with ID {} not found for deletion", planets_id);
            return Err(ApiError::WriteNotFound);
        }
        Err(db_error) => {
            error!("Failed to look up planet {} for deletion: {}", planets_id, db_error);
            return Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
    };

    match existing.delete(&state.db).await {
        Ok(_) => {
            info!("Planet with ID {} deleted successfully", planets_id);
            Ok((StatusCode::NO_CONTENT, Json(serde_json::json!([]))))
        }
        Err(db_error) => {
            error!("Failed to delete planet with ID {}: {}", planets_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}
