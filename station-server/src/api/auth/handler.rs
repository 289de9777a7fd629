//! Authentication Handlers
//!
//! Handles login and session info

use std::time::Duration;

use axum::{extract::State, Json};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// Authenticates staff credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent e-mail enumeration
    let account = match account {
        Some(account) => {
            let password_valid = user::verify_password(&account, &req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service
        .generate_token(&account.user_id, &account.user_name, &account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = %account.user_id, user_name = %account.user_name, "Login success");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account.user_id,
            user_name: account.user_name,
            email: account.email,
            role: account.role,
        },
    }))
}

/// GET /api/auth/me - current session info
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let account = user::find_by_id(&state.pool, &current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {}", current_user.id)))?;

    Ok(Json(UserInfo {
        id: account.user_id,
        user_name: account.user_name,
        email: account.email,
        role: account.role,
    }))
}
