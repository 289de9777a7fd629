//! Bill API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use receipt_printer::{NetworkPrinter, Printer};
use serde::{Deserialize, Serialize};
use shared::models::{Bill, BillAdjustment, BillCreate};
use shared::receipt::Receipt;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::bill;
use crate::printing::ReceiptRenderer;
use crate::utils::validation::{
    validate_required_text, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};
use crate::utils::{time, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional `YYYY-MM` filter
    pub month: Option<String>,
}

/// GET /api/bills - all bills newest first, or one month's bills
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Bill>>> {
    let bills = match query.month.as_deref() {
        Some(month) => bill::find_by_month(&state.pool, month).await?,
        None => bill::find_all(&state.pool).await?,
    };
    Ok(Json(bills))
}

/// GET /api/bills/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Bill>> {
    let bill = bill::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Bill {id}")))?;
    Ok(Json(bill))
}

/// POST /api/bills
///
/// Validates the submission, assigns the next bill number, normalizes
/// absent numeric fields to zero and recomputes the total server-side.
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<BillCreate>,
) -> AppResult<Json<Bill>> {
    validate_create(&payload, &state)?;

    let bill_number = bill::next_bill_number(&state.pool).await?;
    let record = Bill::from_create(
        payload,
        bill_number,
        current_user.username.clone(),
        time::now_iso(),
    );

    let created = bill::create(&state.pool, &record).await?;
    tracing::info!(
        bill_number = %created.bill_number,
        total = created.total,
        created_by = %created.created_by,
        "Bill created"
    );
    Ok(Json(created))
}

fn validate_create(payload: &BillCreate, state: &ServerState) -> AppResult<()> {
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_required_text(&payload.name1, "name1", MAX_NAME_LEN)?;

    if payload.amount1.unwrap_or(0.0) <= 0.0 {
        return Err(AppError::validation("amount1 must be greater than zero"));
    }

    if payload.date.trim().is_empty() {
        return Err(AppError::validation("date must not be empty"));
    }
    let date = time::parse_date(&payload.date)?;
    time::validate_not_past(date, state.config.timezone)?;

    if payload.phone.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation("phone is too long"));
    }

    Ok(())
}

/// PUT /api/bills/{id}/adjustment
///
/// Records a correction against an existing bill. The stored total is
/// deliberately left untouched; the adjustment travels with the bill.
pub async fn adjustment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BillAdjustment>,
) -> AppResult<Json<Bill>> {
    if payload.adjustment_amount.unwrap_or(0.0) < 0.0 {
        return Err(AppError::validation(
            "adjustment_amount must not be negative",
        ));
    }

    let updated = bill::apply_adjustment(&state.pool, id, payload, &time::now_iso()).await?;
    tracing::info!(bill_number = %updated.bill_number, "Bill adjustment recorded");
    Ok(Json(updated))
}

/// DELETE /api/bills/{id}
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = bill::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Bill {id}")));
    }
    Ok(Json(true))
}

/// GET /api/bills/{id}/receipt - printable projection (used by the
/// on-screen detail view as well)
pub async fn receipt(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Receipt>> {
    let bill = bill::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Bill {id}")))?;
    Ok(Json(Receipt::from_bill(&bill)))
}

#[derive(Serialize)]
pub struct PrintResponse {
    pub printed: bool,
    pub bill_number: String,
}

/// POST /api/bills/{id}/print - send the receipt to the shop printer
pub async fn print(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PrintResponse>> {
    let addr = state
        .config
        .printer_addr
        .as_deref()
        .ok_or_else(|| AppError::invalid("Receipt printer is not configured"))?;

    let bill = bill::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Bill {id}")))?;

    let receipt = Receipt::from_bill(&bill);
    let renderer = ReceiptRenderer::new(state.config.printer_width);
    let data = renderer.render(&receipt);

    let printer = NetworkPrinter::from_addr(addr)?;
    printer.print(&data).await?;

    tracing::info!(bill_number = %bill.bill_number, printer = %addr, "Receipt printed");
    Ok(Json(PrintResponse {
        printed: true,
        bill_number: bill.bill_number,
    }))
}
