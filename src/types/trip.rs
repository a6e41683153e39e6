use chrono::{DateTime, Utc};
use entity::trip::{Model as TripModel, TripStatus};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validation::{
    check_age_range, check_max_len, check_non_negative, check_required, check_trip_window,
    parse_enum, CURRENCY_MAX, DESCRIPTION_MAX, DESTINATION_MAX, TRIP_PHOTO_MAX,
};

/// Trip creation body. Any `id` or `host_id` the client sends is ignored:
/// ids are assigned by the database and the host is the caller.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTripCreate {
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub available_seats: Option<i32>,
    pub description: String,
    pub photo: Option<String>,
    pub budget: i32,
    pub budget_currency: String,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RTripUpdate {
    pub destination: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub available_seats: Option<i32>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub budget: Option<i32>,
    pub budget_currency: Option<String>,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DBTripCreate {
    pub destination: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub available_seats: Option<i32>,
    pub description: String,
    pub photo: Option<String>,
    pub budget: i32,
    pub budget_currency: String,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub status: TripStatus,
}

#[derive(Debug, Clone, Default)]
pub struct DBTripUpdate {
    pub destination: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub available_seats: Option<i32>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub budget: Option<i32>,
    pub budget_currency: Option<String>,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub status: Option<TripStatus>,
}

fn check_trip_text(
    destination: Option<&str>,
    description: Option<&str>,
    photo: Option<&str>,
    currency: Option<&str>,
) -> Result<(), AppError> {
    check_max_len("destination", destination, DESTINATION_MAX)?;
    check_max_len("description", description, DESCRIPTION_MAX)?;
    check_max_len("photo", photo, TRIP_PHOTO_MAX)?;
    check_max_len("budget_currency", currency, CURRENCY_MAX)
}

impl TryFrom<RTripCreate> for DBTripCreate {
    type Error = AppError;

    fn try_from(r: RTripCreate) -> Result<Self, Self::Error> {
        check_required("destination", &r.destination)?;
        check_required("description", &r.description)?;
        check_required("budget_currency", &r.budget_currency)?;
        check_trip_text(
            Some(&r.destination),
            Some(&r.description),
            r.photo.as_deref(),
            Some(&r.budget_currency),
        )?;
        check_trip_window(r.start_date, r.end_date)?;
        check_non_negative("available_seats", r.available_seats)?;
        check_non_negative("budget", Some(r.budget))?;
        check_age_range(r.age_min, r.age_max)?;

        let status = match r.status.as_deref() {
            Some(raw) => parse_enum::<TripStatus>("status", raw)?,
            None => TripStatus::Planning,
        };

        Ok(DBTripCreate {
            destination: r.destination,
            start_date: r.start_date,
            end_date: r.end_date,
            available_seats: r.available_seats,
            description: r.description,
            photo: r.photo,
            budget: r.budget,
            budget_currency: r.budget_currency,
            age_min: r.age_min,
            age_max: r.age_max,
            status,
        })
    }
}

impl RTripUpdate {
    /// Validates the patch against the row it will be applied to, so a
    /// single-sided date or age change still has to respect the other side.
    pub fn into_update(self, current: &TripModel) -> Result<DBTripUpdate, AppError> {
        if let Some(destination) = &self.destination {
            check_required("destination", destination)?;
        }
        if let Some(description) = &self.description {
            check_required("description", description)?;
        }
        if let Some(currency) = &self.budget_currency {
            check_required("budget_currency", currency)?;
        }
        check_trip_text(
            self.destination.as_deref(),
            self.description.as_deref(),
            self.photo.as_deref(),
            self.budget_currency.as_deref(),
        )?;
        check_trip_window(
            self.start_date.unwrap_or(current.start_date),
            self.end_date.unwrap_or(current.end_date),
        )?;
        check_non_negative("available_seats", self.available_seats)?;
        check_non_negative("budget", self.budget)?;
        check_age_range(self.age_min.or(current.age_min), self.age_max.or(current.age_max))?;

        let status = self
            .status
            .as_deref()
            .map(|raw| parse_enum::<TripStatus>("status", raw))
            .transpose()?;

        Ok(DBTripUpdate {
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            available_seats: self.available_seats,
            description: self.description,
            photo: self.photo,
            budget: self.budget,
            budget_currency: self.budget_currency,
            age_min: self.age_min,
            age_max: self.age_max,
            status,
        })
    }
}
