//! Staff account API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{User, UserCreate, UserUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    validate_required_text, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN,
};
use crate::utils::{AppError, AppResult};

fn validate_role(role: &str) -> AppResult<()> {
    if role != "admin" && role != "user" {
        return Err(AppError::validation(format!("Unknown role: {role}")));
    }
    Ok(())
}

/// GET /api/users - all staff accounts (password hashes are never serialized)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.user_name, "user_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validate_role(&payload.role)?;

    let created = user::create(&state.pool, payload).await?;
    tracing::info!(user_id = %created.user_id, email = %created.email, "Staff account created");
    Ok(Json(created))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let account = user::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {id}")))?;
    Ok(Json(account))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    if let Some(name) = &payload.user_name {
        validate_required_text(name, "user_name", MAX_NAME_LEN)?;
    }
    if let Some(email) = &payload.email {
        validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    }
    if let Some(password) = &payload.password {
        validate_required_text(password, "password", MAX_PASSWORD_LEN)?;
    }
    if let Some(role) = &payload.role {
        validate_role(role)?;
    }

    let updated = user::update(&state.pool, &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/users/{id}
///
/// An admin cannot delete their own account; that would be an easy way
/// to lock everyone out.
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if current_user.id == id {
        return Err(AppError::validation("Cannot delete your own account"));
    }

    let deleted = user::delete(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Staff {id}")));
    }
    Ok(Json(true))
}
