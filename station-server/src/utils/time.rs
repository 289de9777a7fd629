//! Time helpers - business timezone and Thai calendar formatting
//!
//! Dates on bills are ISO `YYYY-MM-DD` strings; all "today" comparisons
//! happen in the shop's timezone, and printed receipts show Buddhist-era
//! dates (Gregorian year + 543).

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Validate that an appointment date is today or later (business timezone)
pub fn validate_not_past(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = today(tz);
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        )));
    }
    Ok(())
}

/// Current timestamp as RFC 3339 UTC, for created_at/updated_at columns
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Format a date in Thai Buddhist-era style: dd/mm/yyyy with year + 543.
/// Unparseable input is returned verbatim.
pub fn format_thai_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{:02}/{:02}/{}", d.day(), d.month(), d.year() + 543),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_only() {
        assert!(parse_date("2026-08-23").is_ok());
        assert!(parse_date("23/08/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn thai_date_adds_543_years() {
        assert_eq!(format_thai_date("2026-08-23"), "23/08/2569");
        assert_eq!(format_thai_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn past_dates_are_rejected() {
        let tz = chrono_tz::Asia::Bangkok;
        let yesterday = today(tz).pred_opt().unwrap();
        assert!(validate_not_past(yesterday, tz).is_err());
        assert!(validate_not_past(today(tz), tz).is_ok());
    }
}
