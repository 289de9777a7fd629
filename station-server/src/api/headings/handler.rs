//! Heading API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Heading, HeadingCreate, HeadingUpdate};

use crate::core::ServerState;
use crate::db::repository::heading;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN,
};
use crate::utils::{time, AppError, AppResult};

/// GET /api/headings - all headings (management view)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Heading>>> {
    let headings = heading::find_all(&state.pool).await?;
    Ok(Json(headings))
}

/// GET /api/headings/visible - headings currently eligible for display
pub async fn list_visible(State(state): State<ServerState>) -> AppResult<Json<Vec<Heading>>> {
    let today = time::today(state.config.timezone).to_string();
    let headings = heading::find_visible(&state.pool, &today).await?;
    Ok(Json(headings))
}

/// GET /api/headings/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Heading>> {
    let heading = heading::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Heading {id}")))?;
    Ok(Json(heading))
}

/// POST /api/headings
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HeadingCreate>,
) -> AppResult<Json<Heading>> {
    validate_required_text(&payload.heading_name, "heading_name", MAX_NAME_LEN)?;
    if payload.heading_details.len() > MAX_NOTE_LEN {
        return Err(AppError::validation("heading_details is too long"));
    }
    validate_window(&payload.time_start, &payload.time_end)?;

    let heading = heading::create(&state.pool, payload, &time::now_iso()).await?;
    Ok(Json(heading))
}

/// PUT /api/headings/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<HeadingUpdate>,
) -> AppResult<Json<Heading>> {
    if let Some(name) = &payload.heading_name {
        validate_required_text(name, "heading_name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.heading_details, "heading_details", MAX_NOTE_LEN)?;

    let heading = heading::update(&state.pool, id, payload, &time::now_iso()).await?;
    Ok(Json(heading))
}

/// DELETE /api/headings/{id}
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = heading::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Heading {id}")));
    }
    Ok(Json(true))
}

/// Both window bounds are optional, but non-blank bounds must be valid
/// ISO dates and must not be inverted.
fn validate_window(time_start: &str, time_end: &str) -> AppResult<()> {
    let start = match time_start.trim() {
        "" => None,
        s => Some(time::parse_date(s)?),
    };
    let end = match time_end.trim() {
        "" => None,
        s => Some(time::parse_date(s)?),
    };
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(AppError::validation("time_end is before time_start"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_window;

    #[test]
    fn blank_window_bounds_are_open_ended() {
        assert!(validate_window("", "").is_ok());
        assert!(validate_window("2026-01-01", "").is_ok());
        assert!(validate_window("", "2026-12-31").is_ok());
    }

    #[test]
    fn inverted_window_is_rejected() {
        assert!(validate_window("2026-12-31", "2026-01-01").is_err());
        assert!(validate_window("2026-01-01", "2026-12-31").is_ok());
    }
}
