use chrono::{DateTime, NaiveDate};

use super::types::{DomainError, DomainResult};

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_date(raw: &str, field: &str) -> DomainResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| DomainError::Validation(format!("{}格式应为YYYY-MM-DD", field)))
}

/// Trimmed, non-empty text or a validation error naming the field.
pub fn require_text(raw: &str, field: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{}不能为空", field)));
    }
    Ok(trimmed.to_string())
}

/// Identifiers arrive as plain integers where 0 means "absent".
pub fn optional_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}
