//! Timestamp-string helpers.
//!
//! The sensor store speaks `yyyy-MM-dd HH:mm:ss` date-time strings. Search
//! bounds and row timestamps travel through the data access layer as opaque
//! text in that convention; these helpers exist for *callers* building
//! bounds, the access layer itself never reformats them.

use chrono::NaiveDateTime;

/// Format of date-time strings exchanged with the sensor store.
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a date-time in the store's `yyyy-MM-dd HH:mm:ss` convention.
#[must_use]
pub fn to_sql_datetime(value: NaiveDateTime) -> String {
    value.format(SQL_DATETIME_FORMAT).to_string()
}

/// Parse a date-time string in the store's convention.
///
/// Returns `None` when the text does not match the convention. Callers that
/// only forward bounds never need this.
#[must_use]
pub fn parse_sql_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, SQL_DATETIME_FORMAT).ok()
}
