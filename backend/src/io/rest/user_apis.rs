//! # REST API for Users

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use shared::UserDto;
use tracing::info;

use crate::error::ApiError;
use crate::io::rest::mappers::UserMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/user/:id", get(get_user_by_id))
}

/// Get a user by ID
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    info!("GET /user/{}", id);

    let user = state.user_service.get_user_by_id(id).await?;
    Ok(Json(UserMapper::to_dto(user)))
}
