//! Study date parsing and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use survey_model::MISSING_CELL_PLACEHOLDER;

use crate::error::{Result, StudiesError};

const DISPLAY_FORMAT: &str = "%m/%d/%Y";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar day of a study date as written.
///
/// Accepts RFC 3339 timestamps, naive timestamps, and plain dates. Timestamps
/// keep the date in their own offset.
pub fn parse_study_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

/// Parse a `YYYY-MM-DD` filter bound.
pub fn parse_filter_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| StudiesError::InvalidDate(text.to_string()))
}

/// Display form `MM/DD/YYYY` of a study date.
///
/// Status-prefixed values such as `"Completed / 05/10/2024"` keep their last
/// three slash-separated parts. Missing values render as `N/A`; anything
/// unparseable is returned unchanged.
pub fn format_date(text: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return MISSING_CELL_PLACEHOLDER.to_string();
    };
    if let Some(date) = parse_study_date(text) {
        return date.format(DISPLAY_FORMAT).to_string();
    }

    let date_part = if text.contains('/') {
        let parts: Vec<&str> = text.split('/').collect();
        parts[parts.len().saturating_sub(3)..].join("/")
    } else {
        text.to_string()
    };
    let cleaned: String = date_part
        .chars()
        .filter(|c| !c.is_ascii_alphabetic())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return text.to_string();
    }
    // Drop spaces left around the slashes.
    let compact: String = cleaned.split_whitespace().collect();
    parse_study_date(&compact)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| text.to_string())
}
