//! 用户处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{User, UserInput};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{parse_id, Payload},
    response::ApiResponse,
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, CoreError> {
    let users = state.user_service.list_users()?;
    Ok(Json(ApiResponse::success(users)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, CoreError> {
    let user = state.user_service.get_user(parse_id(&id))?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Payload(input): Payload<UserInput>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), CoreError> {
    let user = state.user_service.create_user(input)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created", user)),
    ))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(input): Payload<UserInput>,
) -> Result<Json<ApiResponse<User>>, CoreError> {
    let user = state.user_service.update_user(parse_id(&id), input)?;
    Ok(Json(ApiResponse::with_message("User updated", user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    let message = state.user_service.delete_user(parse_id(&id))?;
    Ok(Json(ApiResponse::message(message)))
}
