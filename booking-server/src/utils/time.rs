//! Date helpers

use chrono::NaiveDate;
use shared::util::DATE_FORMAT;
use shared::{AppError, AppResult, ErrorCode};

/// Parse a `YYYY-MM-DD` event date
pub fn parse_event_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        AppError::new(ErrorCode::InvalidEventDate).with_detail("event_date", date.to_string())
    })
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
