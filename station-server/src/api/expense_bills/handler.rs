//! Expense bill API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{ExpenseBill, ExpenseBillCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::expense_bill;
use crate::utils::validation::{validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN};
use crate::utils::{time, AppError, AppResult};

/// GET /api/expense-bills
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ExpenseBill>>> {
    let expenses = expense_bill::find_all(&state.pool).await?;
    Ok(Json(expenses))
}

/// GET /api/expense-bills/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ExpenseBill>> {
    let expense = expense_bill::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Expense bill {id}")))?;
    Ok(Json(expense))
}

/// POST /api/expense-bills
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ExpenseBillCreate>,
) -> AppResult<Json<ExpenseBill>> {
    validate_required_text(&payload.item_name, "item_name", MAX_NAME_LEN)?;
    if payload.note.len() > MAX_NOTE_LEN {
        return Err(AppError::validation("note is too long"));
    }
    if payload.amount.unwrap_or(0.0) <= 0.0 {
        return Err(AppError::validation("amount must be greater than zero"));
    }
    if !payload.date.trim().is_empty() {
        time::parse_date(&payload.date)?;
    }

    let created = expense_bill::create(
        &state.pool,
        payload,
        &current_user.username,
        &time::now_iso(),
    )
    .await?;
    Ok(Json(created))
}

/// DELETE /api/expense-bills/{id}
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = expense_bill::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Expense bill {id}")));
    }
    Ok(Json(true))
}
