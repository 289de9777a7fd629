//! Monthly report API Handlers

use axum::{
    extract::{Query, State},
    http::header,
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::bill;
use crate::reports::MonthlyReport;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: String,
}

/// Month keys are `YYYY-MM`; anything else would silently match nothing.
fn validate_month(month: &str) -> AppResult<()> {
    let valid = month.len() == 7
        && month.as_bytes()[4] == b'-'
        && month[..4].chars().all(|c| c.is_ascii_digit())
        && month[5..].chars().all(|c| c.is_ascii_digit())
        && (1..=12).contains(&month[5..].parse::<u32>().unwrap_or(0));
    if !valid {
        return Err(AppError::validation(format!(
            "Invalid month: {month} (expected YYYY-MM)"
        )));
    }
    Ok(())
}

/// GET /api/reports/monthly?month=YYYY-MM
pub async fn monthly(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<MonthlyReport>> {
    validate_month(&query.month)?;
    let bills = bill::find_by_month(&state.pool, &query.month).await?;
    Ok(Json(MonthlyReport::build(&query.month, bills)))
}

/// GET /api/reports/monthly/csv?month=YYYY-MM
pub async fn monthly_csv(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<([(header::HeaderName, String); 2], String)> {
    validate_month(&query.month)?;
    let bills = bill::find_by_month(&state.pool, &query.month).await?;
    let report = MonthlyReport::build(&query.month, bills);

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"report-{}.csv\"", query.month),
        ),
    ];
    Ok((headers, report.to_csv()))
}

#[cfg(test)]
mod tests {
    use super::validate_month;

    #[test]
    fn month_format_is_enforced() {
        assert!(validate_month("2026-08").is_ok());
        assert!(validate_month("2026-12").is_ok());
        assert!(validate_month("2026-13").is_err());
        assert!(validate_month("2026-00").is_err());
        assert!(validate_month("2026-8").is_err());
        assert!(validate_month("08-2026").is_err());
        assert!(validate_month("").is_err());
    }
}
