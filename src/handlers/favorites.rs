use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::favorites;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::AppState;

/// Favorite response model. Unlike the catalog POST routes, favorite
/// creation returns the persisted row so the caller sees the assigned id.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub planets_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl From<favorites::Model> for FavoriteResponse {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planets_id: model.planets_id,
            people_id: model.people_id,
        }
    }
}

/// Get all favorites
#[utoipa::path(
    get,
    path = "/favorite/",
    tag = "favorites",
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = Vec<FavoriteResponse>),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    debug!("Fetching all favorites from database");

    match favorites::Entity::find().all(&state.db).await {
        Ok(rows) => {
            info!("Successfully retrieved {} favorites", rows.len());
            Ok(Json(rows.into_iter().map(FavoriteResponse::from).collect()))
        }
        Err(db_error) => {
            error!("Failed to retrieve favorites from database: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}

/// Link a user to a person.
///
/// Neither id is pre-checked against its table; a reference to a missing
/// row is rejected by the store's foreign keys and surfaces as a 400
/// without a partial row being persisted.
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Favorite created", body = FavoriteResponse),
        (status = 400, description = "Storage rejection (broken reference)", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn create_people_favorite(
    Path((user_id, people_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    debug!("Creating favorite: user {} -> person {}", user_id, people_id);

    let new_favorite = favorites::ActiveModel {
        user_id: Set(user_id),
        people_id: Set(Some(people_id)),
        planets_id: Set(None),
        ..Default::default()
    };

    match new_favorite.insert(&state.db).await {
        Ok(favorite) => {
            info!("Favorite created successfully with ID: {}", favorite.id);
            Ok(Json(FavoriteResponse::from(favorite)))
        }
        Err(db_error) => {
            error!(
                "Failed to create favorite (user {}, person {}): {}",
                user_id, people_id, db_error
            );
            Err(ApiError::Storage {
                status: StatusCode::BAD_REQUEST,
            })
        }
    }
}

/// Unlink a user from a person.
///
/// Deletes the first row matching the (user_id, people_id) pair; a pair
/// with no matching row answers 400 instead of tripping the store.
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 204, description = "Favorite deleted; body is an empty array"),
        (status = 400, description = "No matching favorite or storage rejection", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn delete_people_favorite(
    Path((user_id, people_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    debug!("Deleting favorite: user {} -> person {}", user_id, people_id);

    let existing = match favorites::Entity::find()
        .filter(favorites::Column::UserId.eq(user_id))
        .filter(favorites::Column::PeopleId.eq(people_id))
        .one(&state.db)
        .await
    {
        Ok(Some(favorite)) => favorite,
        Ok(None) => {
            warn!(
                "No favorite found for user {} and person {}",
                user_id, people_id
            );
            return Err(ApiError::WriteNotFound);
        }
        Err(db_error) => {
            error!(
                "Failed to look up favorite (user {}, person {}): {}",
                user_id, people_id, db_error
            );
            return Err(ApiError::Storage {
                status: StatusCode::BAD_REQUEST,
            });
        }
    };

    match existing.delete(&state.db).await {
        Ok(_) => {
            info!(
                "Favorite deleted for user {} and person {}",
                user_id, people_id
            );
            Ok((StatusCode::NO_CONTENT, Json(serde_json::json!([]))))
        }
        Err(db_error) => {
            error!(
                "Failed to delete favorite (user {}, person {}): {}",
                user_id, people_id, db_error
            );
            Err(ApiError::Storage {
                status: StatusCode::BAD_REQUEST,
            })
        }
    }
}
