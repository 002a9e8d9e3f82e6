use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Calendar dates are always `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Optional variant used for loosely typed columns such as
/// `date_of_establishment`: an empty string means "not set".
pub fn parse_optional_date(s: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}
