use crate::errors::{AppError, AppResult};

/// Names are uniqueness keys; an empty one would collide with every other
/// empty one and identify nothing.
pub fn require_name(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
