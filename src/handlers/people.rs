use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::people;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::AppState;

/// Request body for creating or replacing a person.
///
/// Every field is optional at the parsing stage so validation can report
/// the full set of missing fields in one response instead of failing on
/// the first absent key.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl PersonPayload {
    /// All required fields, or the complete list of absent ones.
    fn complete(&self) -> Result<(String, String, i32), ApiError> {
        match (&self.name, &self.gender, self.birth_year) {
            (Some(name), Some(gender), Some(birth_year)) => {
                Ok((name.clone(), gender.clone(), birth_year))
            }
            _ => {
                let mut missing = Vec::new();
                if self.name.is_none() {
                    missing.push("name");
                }
                if self.gender.is_none() {
                    missing.push("gender");
                }
                if self.birth_year.is_none() {
                    missing.push("birth_year");
                }
                Err(ApiError::BadProperty { missing })
            }
        }
    }
}

/// Person response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_year: i32,
}

impl From<people::Model> for PersonResponse {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            birth_year: model.birth_year,
        }
    }
}

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = Vec<PersonResponse>),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    debug!("Fetching all people from database");

    match people::Entity::find().all(&state.db).await {
        Ok(rows) => {
            info!("Successfully retrieved {} people", rows.len());
            Ok(Json(rows.into_iter().map(PersonResponse::from).collect()))
        }
        Err(db_error) => {
            error!("Failed to retrieve people from database: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Get a specific person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person retrieved successfully", body = PersonResponse),
        (status = 404, description = "Person not found", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_person(
    Path(people_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PersonResponse>, ApiError> {
    debug!("Fetching person with ID: {}", people_id);

    match people::Entity::find_by_id(people_id).one(&state.db).await {
        Ok(Some(person)) => {
            info!("Successfully retrieved person with ID: {}", person.id);
            Ok(Json(PersonResponse::from(person)))
        }
        Ok(None) => {
            warn!("Person with ID {} not found", people_id);
            Err(ApiError::NotFound)
        }
        Err(db_error) => {
            error!("Failed to retrieve person with ID {}: {}", people_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Create a new person.
///
/// The response echoes the request body; the assigned id is not part of
/// the published contract and callers list the collection to observe it.
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = PersonPayload,
    responses(
        (status = 200, description = "Person stored; request body echoed back", body = PersonPayload),
        (status = 400, description = "Missing fields or storage rejection", body = crate::schemas::BadPropertyBody)
    )
)]
#[instrument]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> Result<Json<PersonPayload>, ApiError> {
    let (name, gender, birth_year) = payload.complete().map_err(|e| {
        warn!("Create person rejected: {}", e);
        e
    })?;

    let new_person = people::ActiveModel {
        name: Set(name),
        gender: Set(gender),
        birth_year: Set(birth_year),
        ..Default::default()
    };

    match new_person.insert(&state.db).await {
        Ok(person) => {
            info!("Person created successfully with ID: {}", person.id);
            Ok(Json(payload))
        }
        Err(db_error) => {
            error!("Failed to create person: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::BAD_REQUEST,
            })
        }
    }
}

/// Replace a person.
///
/// Every field is overwritten from the request body; this is a full
/// replacement, not a partial patch. A missing id answers 400, matching
/// the original write-path contract rather than the 404 of the read path.
#[utoipa::path(
    put,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    request_body = PersonPayload,
    responses(
        (status = 201, description = "Person replaced", body = PersonResponse),
        (status = 400, description = "Person not found or missing fields", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn update_person(
    Path(people_id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    debug!("Updating person with ID: {}", people_id);

    let existing = match people::Entity::find_by_id(people_id).one(&state.db).await {
        Ok(Some(person)) => person,
        Ok(None) => {
            warn!("Person with ID {} not found for update", people_id);
            return Err(ApiError::WriteNotFound);
        }
        Err(db_error) => {
            error!("Failed to look up person {} for update: {}", people_id, db_error);
            return Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
    };

    let (name, gender, birth_year) = payload.complete().map_err(|e| {
        warn!("Update person rejected: {}", e);
        e
    })?;

    let mut person_active: people::ActiveModel = existing.into();
    person_active.name = Set(name);
    person_active.gender = Set(gender);
    person_active.birth_year = Set(birth_year);

    match person_active.update(&state.db).await {
        Ok(updated) => {
            info!("Person with ID {} updated successfully", people_id);
            Ok((StatusCode::CREATED, Json(PersonResponse::from(updated))))
        }
        Err(db_error) => {
            error!("Failed to update person with ID {}: {}", people_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 204, description = "Person deleted; body is an empty array"),
        (status = 400, description = "Person not found", body = crate::schemas::MessageBody),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn delete_person(
    Path(people_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    debug!("Attempting to delete person with ID: {}", people_id);

    let existing = match people::Entity::find_by_id(people_id).one(&state.db).await {
        Ok(Some(person)) => person,
        Ok(None) => {
            warn!("Person with ID {} not found for deletion", people_id);
            return Err(ApiError::WriteNotFound);
        }
        Err(db_error) => {
            error!("Failed to look up person {} for deletion: {}", people_id, db_error);
            return Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
    };

    match existing.delete(&state.db).await {
        Ok(_) => {
            info!("Person with ID {} deleted successfully", people_id);
            Ok((StatusCode::NO_CONTENT, Json(serde_json::json!([]))))
        }
        Err(db_error) => {
            error!("Failed to delete person with ID {}: {}", people_id, db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}
