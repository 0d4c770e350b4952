/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Date format used for every calendar date on the wire (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date formatted as `YYYY-MM-DD`
pub fn today_ymd() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
