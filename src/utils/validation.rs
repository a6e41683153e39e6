use chrono::{DateTime, Utc};
use sea_orm::{ActiveEnum, Iterable};

use crate::types::error::AppError;

/// Parses a string-backed enum column value, listing the allowed values on
/// failure.
pub fn parse_enum<E>(field: &str, raw: &str) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::try_from_value(&raw.to_string()).map_err(|_| {
        let allowed: Vec<String> = E::iter().map(|v| v.to_value()).collect();
        AppError::Validation(format!(
            "{field} must be one of: {} (got {raw:?})",
            allowed.join(", ")
        ))
    })
}

/// Column widths from the migrations. Postgres rejects anything longer.
pub const EMAIL_MAX: usize = 120;
pub const NAME_MAX: usize = 50;
pub const USER_PHOTO_MAX: usize = 300;
pub const BIOGRAPHY_MAX: usize = 500;
pub const DESTINATION_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 200;
pub const TRIP_PHOTO_MAX: usize = 255;
pub const CURRENCY_MAX: usize = 8;
pub const MESSAGE_MAX: usize = 200;

pub fn check_required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Lengths are counted in characters, matching `VARCHAR(n)`.
pub fn check_max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

pub fn check_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::Validation("email is invalid".to_string())),
    }
}

pub fn check_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }
    Ok(())
}

pub fn check_non_negative(field: &str, value: Option<i32>) -> Result<(), AppError> {
    match value {
        Some(v) if v < 0 => Err(AppError::Validation(format!("{field} must not be negative"))),
        _ => Ok(()),
    }
}

pub fn check_trip_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::Validation(
            "end_date must not be before start_date".to_string(),
        ));
    }
    Ok(())
}

pub fn check_age_range(min: Option<i32>, max: Option<i32>) -> Result<(), AppError> {
    check_non_negative("age_min", min)?;
    check_non_negative("age_max", max)?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation("age_min must not exceed age_max".to_string()));
        }
    }
    Ok(())
}
