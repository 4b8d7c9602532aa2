use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use model::entities::user;
use sea_orm::EntityTrait;
use serde::Serialize;
use tracing::{debug, error, info, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::AppState;

/// User response model. The password column never leaves the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Storage failure", body = crate::schemas::MessageBody)
    )
)]
#[instrument]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Fetching all users from database");

    match user::Entity::find().all(&state.db).await {
        Ok(users) => {
            info!("Successfully retrieved {} users", users.len());
            Ok(Json(users.into_iter().map(UserResponse::from).collect()))
        }
        Err(db_error) => {
            error!("Failed to retrieve users from database: {}", db_error);
            Err(ApiError::Storage {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }
}
